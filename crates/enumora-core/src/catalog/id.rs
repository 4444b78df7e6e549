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

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Namespace for ids derived from stable string keys (asset paths, GUIDs).
const ENTRY_KEY_NAMESPACE: Uuid = Uuid::from_u128(0x5c0e_72a4_1d3b_4f6e_9a8d_2b7c_e41f_0a93);

/// A globally unique, persistent identifier for a catalog entry.
///
/// The id represents the asset itself, decoupled from its name: two entries
/// may share a name, but never an id. Renaming an asset keeps its id, so
/// references held by callers survive a catalog refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Creates a new, random (version 4) `EntryId`.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derives a deterministic (version 5) `EntryId` from a stable key.
    ///
    /// The same key always yields the same id, which lets a provider that
    /// indexes assets by path or GUID hand out identities that stay equal
    /// across independent listings.
    pub fn from_key(key: &str) -> Self {
        Self(Uuid::new_v5(&ENTRY_KEY_NAMESPACE, key.as_bytes()))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    /// Creates a new, random (version 4) `EntryId`.
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EntryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
