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

use super::id::EntryId;
use serde::{Deserialize, Serialize};

/// A handle to one named asset of a category.
///
/// Names are not unique within a category; the [`EntryId`] is. Display names
/// shown to users are derived from `name` by the registry's disambiguation
/// pass and are never stored on the entry itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identity of the asset.
    pub id: EntryId,
    /// The raw name supplied by the provider.
    pub name: String,
}

impl CatalogEntry {
    /// Creates an entry from an id and a raw name.
    pub fn new(id: EntryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Creates an entry whose id is derived from a stable key.
    pub fn keyed(key: &str, name: impl Into<String>) -> Self {
        Self::new(EntryId::from_key(key), name)
    }

    /// Returns `true` if the entry's name equals `query` once both are
    /// trimmed and case-folded.
    pub fn matches_name(&self, query: &str) -> bool {
        normalize_name(&self.name) == normalize_name(query)
    }
}

/// Canonical form used for case-insensitive name comparison.
pub fn normalize_name(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_ignores_case_and_padding() {
        let entry = CatalogEntry::keyed("mood/happy", "Happy");

        assert!(entry.matches_name("happy"));
        assert!(entry.matches_name("  HAPPY\t"));
        assert!(!entry.matches_name("Happy (2)"));
        assert!(!entry.matches_name("hap"));
    }

    #[test]
    fn test_entry_serializes_with_id_and_name() {
        let entry = CatalogEntry::keyed("mood/sad", "Sad");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["name"], "Sad");
        assert_eq!(json["id"], entry.id.to_string());
    }
}
