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

//! Keeping an entry slot in sync with the name it is supposed to hold.

use crate::registry::Registry;
use enumora_core::{CatalogEntry, CatalogResult, Category};

/// Fills `slot` with the entry of `category` named `name` unless it already
/// holds it.
///
/// The slot is reassigned when it is empty or when its entry's name no
/// longer matches `name` (trimmed, case-insensitive). Returns `true` if the
/// slot was written. Lookup errors are returned with the slot untouched.
///
/// `owner` names whoever holds the slot; when given, a reassignment is
/// logged as a warning so stale data can be tracked down.
pub fn assign_if_missing_or_renamed(
    registry: &Registry,
    slot: &mut Option<CatalogEntry>,
    category: &Category,
    name: &str,
    owner: Option<&str>,
) -> CatalogResult<bool> {
    if slot.as_ref().is_some_and(|entry| entry.matches_name(name)) {
        return Ok(false);
    }

    let entry = registry.get_by_name(category, name)?;
    *slot = Some(entry);

    if let Some(owner) = owner {
        log::warn!("{} was set in: {}", category, owner);
    }
    Ok(true)
}
