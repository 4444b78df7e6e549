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

use anyhow::Result;
use enumora_core::{CatalogEntry, CatalogError, Category, EntryId, EntryProvider, ProviderError};
use enumora_data::{Registry, StaticProvider};
use enumora_telemetry::{CacheCounters, CounterSnapshot};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

// --- Test Setup: a provider that counts queries and can be made to fail ---

#[derive(Default)]
struct CountingProvider {
    inner: StaticProvider,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl CountingProvider {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl EntryProvider for CountingProvider {
    fn list_entries(&self, category: &Category) -> Result<Vec<CatalogEntry>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err("asset index unavailable".into());
        }
        self.inner.list_entries(category)
    }
}

fn color() -> Category {
    Category::new("Color")
}

fn setup() -> (Arc<CountingProvider>, Registry) {
    let provider = Arc::new(CountingProvider::default());
    provider.inner.set_entries(
        "Color",
        vec![
            CatalogEntry::keyed("a1", "Red"),
            CatalogEntry::keyed("a2", "Red"),
            CatalogEntry::keyed("a3", "Blue"),
        ],
    );
    let registry = Registry::new();
    registry.register_provider(color(), provider.clone());
    (provider, registry)
}

// ---

#[test]
fn test_get_all_is_memoized() -> Result<()> {
    let (provider, registry) = setup();

    let first = registry.get_all(&color())?;
    let second = registry.get_all(&color())?;

    assert!(Arc::ptr_eq(&first, &second), "Snapshots should be shared");
    assert_eq!(provider.calls(), 1, "Provider should be queried once");
    assert_eq!(
        first.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
        vec!["Red", "Red", "Blue"]
    );
    Ok(())
}

#[test]
fn test_lookups_share_one_snapshot() -> Result<()> {
    let (provider, registry) = setup();

    registry.get_by_name(&color(), "blue")?;
    registry.display_names(&color())?;
    registry.get_by_text_fragment("Blu")?;

    assert_eq!(provider.calls(), 1);
    Ok(())
}

#[test]
fn test_provider_changes_are_invisible_until_refresh() -> Result<()> {
    let (provider, registry) = setup();
    registry.get_all(&color())?;

    provider.inner.insert("Color", CatalogEntry::keyed("a4", "Green"));
    assert_eq!(registry.get_all(&color())?.len(), 3);
    assert!(registry.get_by_name(&color(), "green").is_err());

    let refreshed = registry.refresh(&color())?;
    assert_eq!(refreshed.len(), 4);
    assert_eq!(registry.get_all(&color())?.len(), 4);
    assert_eq!(
        registry.get_by_name(&color(), "green")?.id,
        EntryId::from_key("a4")
    );
    assert_eq!(provider.calls(), 2);
    Ok(())
}

#[test]
fn test_invalidate_defers_requery_to_next_lookup() -> Result<()> {
    let (provider, registry) = setup();
    registry.get_all(&color())?;

    provider
        .inner
        .rename(&color(), &EntryId::from_key("a2"), "Crimson");
    registry.invalidate(&color());
    assert_eq!(provider.calls(), 1, "Invalidation alone must not query");

    let entry = registry.get_by_name(&color(), "crimson")?;
    assert_eq!(entry.id, EntryId::from_key("a2"));
    assert_eq!(
        registry.display_name_of(&color(), &EntryId::from_key("a1"))?,
        "Red"
    );
    assert_eq!(provider.calls(), 2);
    Ok(())
}

#[test]
fn test_failed_refresh_keeps_previous_snapshot() -> Result<()> {
    let (provider, registry) = setup();
    let before = registry.get_all(&color())?;
    let names_before = registry.display_names(&color())?;

    provider.inner.insert("Color", CatalogEntry::keyed("a4", "Green"));
    provider.set_failing(true);

    let err = registry.refresh(&color()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::ProviderFailure { ref reason, .. } if reason == "asset index unavailable"
    ));

    let after = registry.get_all(&color())?;
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(*registry.display_names(&color())?, *names_before);
    assert_eq!(
        registry.display_name_of(&color(), &EntryId::from_key("a2"))?,
        "Red (2)"
    );
    Ok(())
}

#[test]
fn test_failed_requery_after_invalidate_surfaces_error() -> Result<()> {
    let (provider, registry) = setup();
    registry.get_all(&color())?;

    registry.invalidate(&color());
    provider.set_failing(true);
    assert!(matches!(
        registry.get_all(&color()),
        Err(CatalogError::ProviderFailure { .. })
    ));

    // The stale snapshot survives and is replaced once the provider recovers.
    provider.set_failing(false);
    provider.inner.insert("Color", CatalogEntry::keyed("a4", "Green"));
    assert_eq!(registry.get_all(&color())?.len(), 4);
    Ok(())
}

#[test]
fn test_first_load_failure_caches_nothing() {
    let (provider, registry) = setup();
    provider.set_failing(true);

    assert!(registry.get_all(&color()).is_err());
    assert!(registry.get_all(&color()).is_err());
    assert_eq!(provider.calls(), 2, "Failures must not be cached");
}

#[test]
fn test_invalidate_all_and_provider_replacement() -> Result<()> {
    let (provider, registry) = setup();
    let moods = Arc::new(StaticProvider::new());
    moods.insert("Mood", CatalogEntry::keyed("m1", "Calm"));
    registry.register_provider("Mood", moods.clone());

    registry.get_all(&color())?;
    registry.get_all(&Category::new("Mood"))?;
    registry.invalidate_all();
    registry.get_all(&color())?;
    assert_eq!(provider.calls(), 2);

    let replacement = StaticProvider::new();
    replacement.insert("Mood", CatalogEntry::keyed("m2", "Tense"));
    registry.register_provider("Mood", Arc::new(replacement));
    assert_eq!(
        registry.get_by_name(&Category::new("Mood"), "tense")?.id,
        EntryId::from_key("m2")
    );
    Ok(())
}

#[test]
fn test_counters_track_cache_usage() -> Result<()> {
    let counters = Arc::new(CacheCounters::new());
    let provider = Arc::new(CountingProvider::default());
    provider
        .inner
        .insert("Color", CatalogEntry::keyed("a1", "Red"));
    let registry = Registry::new().with_counters(counters.clone());
    registry.register_provider(color(), provider.clone());

    registry.get_all(&color())?;
    registry.get_all(&color())?;
    registry.get_by_name(&color(), "red")?;
    provider.set_failing(true);
    let _ = registry.refresh(&color());

    assert_eq!(
        counters.snapshot(),
        CounterSnapshot {
            provider_queries: 2,
            cache_hits: 2,
            provider_failures: 1,
        }
    );
    Ok(())
}

#[test]
fn test_concurrent_readers_see_whole_snapshots() -> Result<()> {
    let (provider, registry) = setup();
    let registry = Arc::new(registry);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = registry.snapshot(&color()).unwrap();
                    let entries = snapshot.entries();
                    let names = snapshot.display_names();

                    assert!(entries.len() == 3 || entries.len() == 4);
                    assert_eq!(entries.len(), names.len());
                    for entry in entries.iter() {
                        let display = names
                            .name_for(&entry.id)
                            .expect("entry missing from its own snapshot's names");
                        assert_eq!(names.entry_for(display), Some(entry.id));
                    }
                }
            })
        })
        .collect();

    let a4 = EntryId::from_key("a4");
    for _ in 0..20 {
        provider.inner.insert("Color", CatalogEntry::keyed("a4", "Red"));
        registry.refresh(&color())?;
        provider.inner.remove(&color(), &a4);
        registry.refresh(&color())?;
    }
    provider.inner.insert("Color", CatalogEntry::keyed("a4", "Red"));
    registry.refresh(&color())?;

    for reader in readers {
        reader.join().expect("reader thread panicked");
    }

    let names = registry.display_names(&color())?;
    assert_eq!(names.name_for(&a4), Some("Red (3)"));
    Ok(())
}
