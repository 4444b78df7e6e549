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

/// A type tag naming which catalog a lookup targets (e.g. `"Color"`).
///
/// Distinct categories never share entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Creates a category from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The category bound to the catalog kind `K`.
    pub fn of<K: CatalogKind>() -> Self {
        Self::new(K::CATEGORY)
    }

    /// The category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Binds a Rust type to the category holding its values.
///
/// Implemented once per scriptable-enum kind so typed call sites resolve
/// their category at compile time:
///
/// ```rust
/// use enumora_core::{CatalogKind, Category};
///
/// struct Mood;
///
/// impl CatalogKind for Mood {
///     const CATEGORY: &'static str = "Mood";
/// }
///
/// assert_eq!(Category::of::<Mood>().as_str(), "Mood");
/// ```
pub trait CatalogKind: 'static {
    /// Name of the category this kind lives in.
    const CATEGORY: &'static str;
}
