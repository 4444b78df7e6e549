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

//! Disambiguated display names for the entries of one category.

use enumora_core::{CatalogEntry, EntryId};
use std::collections::HashMap;

/// A bijection between the entries of a snapshot and their display names.
///
/// Built by [`compute_display_names`]; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayNames {
    ordered: Vec<(EntryId, String)>,
    by_name: HashMap<String, EntryId>,
    by_entry: HashMap<EntryId, String>,
}

impl DisplayNames {
    /// The entry shown under `display_name`, if any.
    pub fn entry_for(&self, display_name: &str) -> Option<EntryId> {
        self.by_name.get(display_name).copied()
    }

    /// The display name assigned to `id`, if the entry is indexed.
    pub fn name_for(&self, id: &EntryId) -> Option<&str> {
        self.by_entry.get(id).map(String::as_str)
    }

    /// Display names in provider order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(|(_, name)| name.as_str())
    }

    /// `(id, display name)` pairs in provider order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntryId, &str)> {
        self.ordered.iter().map(|(id, name)| (id, name.as_str()))
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns `true` if no entry is indexed.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    fn assign(&mut self, id: EntryId, display_name: String) {
        self.by_name.insert(display_name.clone(), id);
        self.by_entry.insert(id, display_name.clone());
        self.ordered.push((id, display_name));
    }
}

/// Assigns a unique display name to every entry, in input order.
///
/// The first occurrence of a name keeps it bare; the k-th occurrence becomes
/// `"{name} ({k})"`. A candidate already taken by an earlier display name
/// (for instance an entry literally named `"Red (2)"`) bumps the counter
/// until the candidate is free. Later occurrences of an already indexed id
/// are skipped.
pub fn compute_display_names(entries: &[CatalogEntry]) -> DisplayNames {
    compute_display_names_reserving(entries, &[])
}

/// Like [`compute_display_names`], but never hands out any of `reserved`.
///
/// An entry whose name is reserved is treated as a later occurrence of it,
/// so a picker's null label stays unique: an entry named `"<null>"` is
/// shown as `"<null> (2)"`.
pub fn compute_display_names_reserving(
    entries: &[CatalogEntry],
    reserved: &[&str],
) -> DisplayNames {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    let mut names = DisplayNames::default();

    for entry in entries {
        if names.by_entry.contains_key(&entry.id) {
            continue;
        }

        let seen = occurrences.entry(entry.name.as_str()).or_insert(0);
        *seen += 1;

        let mut counter = *seen;
        let mut candidate = if counter == 1 {
            entry.name.clone()
        } else {
            with_counter(&entry.name, counter)
        };
        while names.by_name.contains_key(&candidate) || reserved.contains(&candidate.as_str())
        {
            counter += 1;
            candidate = with_counter(&entry.name, counter);
        }

        names.assign(entry.id, candidate);
    }

    names
}

fn with_counter(name: &str, counter: usize) -> String {
    format!("{name} ({counter})")
}
