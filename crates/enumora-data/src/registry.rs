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

//! The catalog registry: provider registration, snapshot caching, and
//! name lookups.
//!
//! Each category's entries are cached as an immutable [`Snapshot`]. A
//! snapshot is only ever replaced as a whole, so readers see either the
//! previous listing with its display names or the new one, never a mix.

use crate::display_names::{compute_display_names, DisplayNames};
use crate::picker::PickerChoices;
use enumora_core::{
    normalize_name, CatalogEntry, CatalogError, CatalogKind, CatalogResult, Category, EntryId,
    EntryProvider, RegistryConfig,
};
use enumora_telemetry::CacheCounters;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard};

/// One category's cached listing and its display-name index.
#[derive(Debug, Clone)]
pub struct Snapshot {
    entries: Arc<[CatalogEntry]>,
    names: Arc<DisplayNames>,
}

impl Snapshot {
    /// Entries in provider order.
    pub fn entries(&self) -> &Arc<[CatalogEntry]> {
        &self.entries
    }

    /// The display-name index built from [`entries`](Self::entries).
    pub fn display_names(&self) -> &Arc<DisplayNames> {
        &self.names
    }

    /// Looks up an entry of this snapshot by id.
    pub fn entry(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }
}

struct CachedSnapshot {
    snapshot: Snapshot,
    stale: bool,
}

/// A name-indexed registry of catalog entries.
///
/// Providers are registered per [`Category`]. The first lookup of a category
/// queries its provider and caches the result; later lookups reuse it until
/// the category is refreshed or invalidated. The registry never invalidates
/// on its own: callers react to their host's change notifications.
///
/// All operations are serialized behind one lock, including the provider
/// query of a cache miss, so a registry can be shared between threads.
/// Providers must not call back into the registry that queries them.
pub struct Registry {
    providers: RwLock<HashMap<Category, Arc<dyn EntryProvider>>>,
    snapshots: Mutex<HashMap<Category, CachedSnapshot>>,
    counters: Option<Arc<CacheCounters>>,
}

impl Registry {
    /// Creates a registry with no providers.
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(HashMap::new()),
            snapshots: Mutex::new(HashMap::new()),
            counters: None,
        }
    }

    /// Attaches counters recording provider queries and cache hits.
    pub fn with_counters(mut self, counters: Arc<CacheCounters>) -> Self {
        self.counters = Some(counters);
        self
    }

    /// Registers `provider` for `category` and returns the registry.
    pub fn with_provider(
        self,
        category: impl Into<Category>,
        provider: impl EntryProvider + 'static,
    ) -> Self {
        self.register_provider(category, Arc::new(provider));
        self
    }

    /// Registers `provider` as the source of `category`.
    ///
    /// Replacing an existing provider marks the category's snapshot stale.
    pub fn register_provider(
        &self,
        category: impl Into<Category>,
        provider: Arc<dyn EntryProvider>,
    ) {
        let category = category.into();
        let replaced = self
            .providers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(category.clone(), provider)
            .is_some();

        if replaced {
            self.invalidate(&category);
        }
        log::debug!("Registered catalog provider for '{}'", category);
    }

    /// Returns `true` if a provider is registered for `category`.
    pub fn is_registered(&self, category: &Category) -> bool {
        self.read_providers().contains_key(category)
    }

    /// Registered categories, sorted by name.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.read_providers().keys().cloned().collect();
        categories.sort();
        categories
    }

    /// Returns every entry of `category`, in provider order.
    ///
    /// Served from the cached snapshot when it is fresh: the returned `Arc`
    /// is the same one handed out previously and the provider is not queried.
    pub fn get_all(&self, category: &Category) -> CatalogResult<Arc<[CatalogEntry]>> {
        self.snapshot(category).map(|snapshot| snapshot.entries)
    }

    /// Typed variant of [`get_all`](Self::get_all).
    pub fn get_all_of<K: CatalogKind>(&self) -> CatalogResult<Arc<[CatalogEntry]>> {
        self.get_all(&Category::of::<K>())
    }

    /// Returns the current snapshot of `category`, loading it if needed.
    ///
    /// If the provider fails, a stale snapshot is kept for a later attempt
    /// and the failure is returned.
    pub fn snapshot(&self, category: &Category) -> CatalogResult<Snapshot> {
        let mut snapshots = self.lock_snapshots();

        if let Some(cached) = snapshots.get(category).filter(|cached| !cached.stale) {
            log::trace!("Catalog cache hit for '{}'", category);
            if let Some(counters) = &self.counters {
                counters.record_cache_hit();
            }
            return Ok(cached.snapshot.clone());
        }

        let snapshot = self.load(category)?;
        snapshots.insert(
            category.clone(),
            CachedSnapshot {
                snapshot: snapshot.clone(),
                stale: false,
            },
        );
        Ok(snapshot)
    }

    /// Re-queries the provider of `category` immediately.
    ///
    /// On success the snapshot and its display names are replaced. On
    /// failure the previous snapshot is left untouched.
    pub fn refresh(&self, category: &Category) -> CatalogResult<Arc<[CatalogEntry]>> {
        let mut snapshots = self.lock_snapshots();
        let snapshot = self.load(category)?;
        snapshots.insert(
            category.clone(),
            CachedSnapshot {
                snapshot: snapshot.clone(),
                stale: false,
            },
        );
        Ok(snapshot.entries)
    }

    /// Marks `category` stale so the next lookup re-queries its provider.
    pub fn invalidate(&self, category: &Category) {
        if let Some(cached) = self.lock_snapshots().get_mut(category) {
            cached.stale = true;
            log::debug!("Invalidated catalog snapshot for '{}'", category);
        }
    }

    /// Marks every cached category stale.
    pub fn invalidate_all(&self) {
        let mut snapshots = self.lock_snapshots();
        for cached in snapshots.values_mut() {
            cached.stale = true;
        }
        log::debug!("Invalidated {} catalog snapshots", snapshots.len());
    }

    /// Resolves `name` to the unique entry of `category` with that name.
    ///
    /// The comparison is exact after trimming and case-folding both sides,
    /// and runs against the raw provider names, not the disambiguated
    /// display names.
    pub fn get_by_name(&self, category: &Category, name: &str) -> CatalogResult<CatalogEntry> {
        let query = normalize_name(name);
        let entries = self.get_all(category)?;
        let matches: Vec<&CatalogEntry> = entries
            .iter()
            .filter(|entry| normalize_name(&entry.name) == query)
            .collect();
        unique_match(Some(category), name.trim(), &matches)
    }

    /// Typed variant of [`get_by_name`](Self::get_by_name).
    pub fn get_by_name_of<K: CatalogKind>(&self, name: &str) -> CatalogResult<CatalogEntry> {
        self.get_by_name(&Category::of::<K>(), name)
    }

    /// Resolves the unique entry, across every registered category, whose
    /// raw name contains `text`.
    ///
    /// Matching is case-sensitive and unanchored. Categories are loaded in
    /// name order; a failing provider aborts the search.
    pub fn get_by_text_fragment(&self, text: &str) -> CatalogResult<CatalogEntry> {
        let mut found = Vec::new();
        for category in self.categories() {
            let entries = self.get_all(&category)?;
            found.extend(
                entries
                    .iter()
                    .filter(|entry| entry.name.contains(text))
                    .cloned(),
            );
        }
        let matches: Vec<&CatalogEntry> = found.iter().collect();
        unique_match(None, text, &matches)
    }

    /// Like [`get_by_text_fragment`](Self::get_by_text_fragment), restricted
    /// to one category.
    pub fn get_by_text_fragment_in(
        &self,
        category: &Category,
        text: &str,
    ) -> CatalogResult<CatalogEntry> {
        let entries = self.get_all(category)?;
        let matches: Vec<&CatalogEntry> = entries
            .iter()
            .filter(|entry| entry.name.contains(text))
            .collect();
        unique_match(Some(category), text, &matches)
    }

    /// The display-name index of `category`.
    pub fn display_names(&self, category: &Category) -> CatalogResult<Arc<DisplayNames>> {
        self.snapshot(category).map(|snapshot| snapshot.names)
    }

    /// The display name of entry `id` in `category`.
    pub fn display_name_of(&self, category: &Category, id: &EntryId) -> CatalogResult<String> {
        let names = self.display_names(category)?;
        names
            .name_for(id)
            .map(str::to_string)
            .ok_or_else(|| CatalogError::NotFound {
                category: Some(category.clone()),
                query: id.to_string(),
            })
    }

    /// Resolves an exact display name (as shown in a picker) to its entry.
    pub fn get_by_display_name(
        &self,
        category: &Category,
        display_name: &str,
    ) -> CatalogResult<CatalogEntry> {
        let snapshot = self.snapshot(category)?;
        snapshot
            .names
            .entry_for(display_name)
            .and_then(|id| snapshot.entry(&id))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                category: Some(category.clone()),
                query: display_name.to_string(),
            })
    }

    /// Returns `true` when `category` holds more than `threshold` entries,
    /// in which case an editor should prefer a plain object field over a
    /// picker.
    pub fn exceeds_picker_threshold(
        &self,
        category: &Category,
        threshold: usize,
    ) -> CatalogResult<bool> {
        Ok(self.get_all(category)?.len() > threshold)
    }

    /// Builds the picker choices for `category` from its current snapshot.
    pub fn picker_choices(
        &self,
        category: &Category,
        config: &RegistryConfig,
    ) -> CatalogResult<PickerChoices> {
        let snapshot = self.snapshot(category)?;
        Ok(PickerChoices::from_snapshot(
            category.clone(),
            &snapshot,
            &config.null_label,
        ))
    }

    fn load(&self, category: &Category) -> CatalogResult<Snapshot> {
        let provider = self
            .read_providers()
            .get(category)
            .cloned()
            .ok_or_else(|| CatalogError::UnregisteredCategory(category.clone()))?;

        if let Some(counters) = &self.counters {
            counters.record_provider_query();
        }
        let listed = provider.list_entries(category).map_err(|err| {
            if let Some(counters) = &self.counters {
                counters.record_provider_failure();
            }
            log::warn!("Catalog provider for '{}' failed: {}", category, err);
            CatalogError::ProviderFailure {
                category: category.clone(),
                reason: err.to_string(),
            }
        })?;

        let entries = dedup_ids(category, listed);
        let names = compute_display_names(&entries);
        log::debug!(
            "Loaded catalog snapshot for '{}' ({} entries)",
            category,
            entries.len()
        );

        Ok(Snapshot {
            entries: entries.into(),
            names: Arc::new(names),
        })
    }

    fn lock_snapshots(&self) -> MutexGuard<'_, HashMap<Category, CachedSnapshot>> {
        self.snapshots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_providers(&self) -> RwLockReadGuard<'_, HashMap<Category, Arc<dyn EntryProvider>>> {
        self.providers.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn dedup_ids(category: &Category, listed: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let mut seen = HashSet::with_capacity(listed.len());
    listed
        .into_iter()
        .filter(|entry| {
            let first = seen.insert(entry.id);
            if !first {
                log::warn!(
                    "Dropping duplicate entry id {} ('{}') listed for '{}'",
                    entry.id,
                    entry.name,
                    category
                );
            }
            first
        })
        .collect()
}

fn unique_match(
    category: Option<&Category>,
    query: &str,
    matches: &[&CatalogEntry],
) -> CatalogResult<CatalogEntry> {
    match matches {
        [] => Err(CatalogError::NotFound {
            category: category.cloned(),
            query: query.to_string(),
        }),
        [only] => Ok((*only).clone()),
        many => Err(CatalogError::AmbiguousMatch {
            category: category.cloned(),
            query: query.to_string(),
            matches: many.iter().map(|entry| entry.id).collect(),
        }),
    }
}
