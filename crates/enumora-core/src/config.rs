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

//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Number of entries above which an editor should fall back from a picker
/// to a plain object field.
pub const DEFAULT_PICKER_THRESHOLD: usize = 25;

/// Label of the picker choice that clears a selection.
pub const DEFAULT_NULL_LABEL: &str = "<null>";

/// Tunables for the registry's presentation helpers.
///
/// Every field has a default, so a partial `[config]` table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum entry count for which a picker is offered.
    pub picker_threshold: usize,
    /// Label shown for the empty selection.
    pub null_label: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            picker_threshold: DEFAULT_PICKER_THRESHOLD,
            null_label: DEFAULT_NULL_LABEL.to_string(),
        }
    }
}
