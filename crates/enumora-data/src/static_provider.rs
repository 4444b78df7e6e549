// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An in-memory provider, for tests, tools, and hosts that assemble their
//! catalog themselves.

use enumora_core::{CatalogEntry, Category, EntryId, EntryProvider, ProviderError};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// A provider serving entries held in memory.
///
/// Mutations do not notify any registry: refresh or invalidate the affected
/// category afterwards. Unknown categories list as empty.
#[derive(Debug, Default)]
pub struct StaticProvider {
    entries: RwLock<HashMap<Category, Vec<CatalogEntry>>>,
}

impl StaticProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` to `category`.
    pub fn insert(&self, category: impl Into<Category>, entry: CatalogEntry) {
        self.write()
            .entry(category.into())
            .or_default()
            .push(entry);
    }

    /// Replaces the whole listing of `category`.
    pub fn set_entries(&self, category: impl Into<Category>, entries: Vec<CatalogEntry>) {
        self.write().insert(category.into(), entries);
    }

    /// Removes the entry `id` from `category`, returning it if present.
    pub fn remove(&self, category: &Category, id: &EntryId) -> Option<CatalogEntry> {
        let mut entries = self.write();
        let listing = entries.get_mut(category)?;
        let position = listing.iter().position(|entry| entry.id == *id)?;
        Some(listing.remove(position))
    }

    /// Renames the entry `id` of `category`. Returns `false` if it does not
    /// exist.
    pub fn rename(&self, category: &Category, id: &EntryId, name: impl Into<String>) -> bool {
        let mut entries = self.write();
        match entries
            .get_mut(category)
            .and_then(|listing| listing.iter_mut().find(|entry| entry.id == *id))
        {
            Some(entry) => {
                entry.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Number of entries listed for `category`.
    pub fn len(&self, category: &Category) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(category)
            .map_or(0, Vec::len)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Category, Vec<CatalogEntry>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EntryProvider for StaticProvider {
    fn list_entries(&self, category: &Category) -> Result<Vec<CatalogEntry>, ProviderError> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(category)
            .cloned()
            .unwrap_or_default())
    }
}

impl FromIterator<(Category, CatalogEntry)> for StaticProvider {
    fn from_iter<I: IntoIterator<Item = (Category, CatalogEntry)>>(iter: I) -> Self {
        let provider = Self::new();
        for (category, entry) in iter {
            provider.insert(category, entry);
        }
        provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_preserves_insertion_order() {
        let provider: StaticProvider = [
            (Category::new("Color"), CatalogEntry::keyed("c1", "Red")),
            (Category::new("Color"), CatalogEntry::keyed("c2", "Blue")),
            (Category::new("Mood"), CatalogEntry::keyed("m1", "Calm")),
        ]
        .into_iter()
        .collect();

        let colors = provider.list_entries(&Category::new("Color")).unwrap();
        assert_eq!(
            colors.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Red", "Blue"]
        );
        assert!(provider
            .list_entries(&Category::new("Weather"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_remove_and_rename() {
        let provider = StaticProvider::new();
        let color = Category::new("Color");
        provider.insert("Color", CatalogEntry::keyed("c1", "Red"));
        provider.insert("Color", CatalogEntry::keyed("c2", "Blue"));

        assert!(provider.rename(&color, &EntryId::from_key("c2"), "Navy"));
        assert!(!provider.rename(&color, &EntryId::from_key("c9"), "Teal"));

        let removed = provider.remove(&color, &EntryId::from_key("c1")).unwrap();
        assert_eq!(removed.name, "Red");
        assert_eq!(provider.len(&color), 1);
        assert_eq!(provider.list_entries(&color).unwrap()[0].name, "Navy");
    }
}
