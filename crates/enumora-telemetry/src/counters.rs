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

//! Counters for the registry's snapshot cache.

use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters updated by a registry.
///
/// Shared through an `Arc` so the owner can read them while the registry
/// keeps recording.
#[derive(Debug, Default)]
pub struct CacheCounters {
    provider_queries: AtomicU64,
    cache_hits: AtomicU64,
    provider_failures: AtomicU64,
}

/// A point-in-time copy of [`CacheCounters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    /// Number of times a provider was asked to list a category.
    pub provider_queries: u64,
    /// Number of lookups answered from a fresh snapshot.
    pub cache_hits: u64,
    /// Number of provider queries that failed.
    pub provider_failures: u64,
}

impl CacheCounters {
    /// Creates a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a provider query.
    pub fn record_provider_query(&self) {
        self.provider_queries.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a lookup served from the cache.
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed provider query.
    pub fn record_provider_failure(&self) {
        self.provider_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Reads every counter.
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            provider_queries: self.provider_queries.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            provider_failures: self.provider_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counters_accumulate_across_threads() {
        let counters = Arc::new(CacheCounters::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counters = counters.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        counters.record_cache_hit();
                    }
                    counters.record_provider_query();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        counters.record_provider_failure();

        assert_eq!(
            counters.snapshot(),
            CounterSnapshot {
                provider_queries: 4,
                cache_hits: 40,
                provider_failures: 1,
            }
        );
    }
}
