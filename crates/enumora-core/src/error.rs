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

//! Defines the error type shared by every catalog operation.

use crate::catalog::{Category, EntryId};
use std::fmt;

/// A specialized `Result` type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// An error raised by a catalog lookup or cache operation.
///
/// `NotFound` and `AmbiguousMatch` are recoverable: the caller is expected to
/// supply a more specific name or handle the absence explicitly.
/// `ProviderFailure` is surfaced unchanged, with the cached state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No entry matched the query.
    NotFound {
        /// The category searched, or `None` for a search over all categories.
        category: Option<Category>,
        /// The query as supplied by the caller.
        query: String,
    },
    /// More than one entry matched the query.
    AmbiguousMatch {
        /// The category searched, or `None` for a search over all categories.
        category: Option<Category>,
        /// The query as supplied by the caller.
        query: String,
        /// Ids of every matching entry, in provider order.
        matches: Vec<EntryId>,
    },
    /// The provider backing a category could not be queried.
    ProviderFailure {
        /// The category whose provider failed.
        category: Category,
        /// The provider's error message.
        reason: String,
    },
    /// No provider has been registered for the category.
    UnregisteredCategory(Category),
}

impl CatalogError {
    /// Returns `true` for errors the caller can resolve by refining its query.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound { .. } | CatalogError::AmbiguousMatch { .. }
        )
    }
}

struct Scope<'a>(&'a Option<Category>);

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(category) => write!(f, "category '{category}'"),
            None => f.write_str("any category"),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { category, query } => {
                write!(f, "No catalog entry found for '{query}' in {}", Scope(category))
            }
            CatalogError::AmbiguousMatch {
                category,
                query,
                matches,
            } => {
                write!(
                    f,
                    "{} catalog entries found for '{query}' in {}, \
                     please specify a more specific name",
                    matches.len(),
                    Scope(category)
                )
            }
            CatalogError::ProviderFailure { category, reason } => {
                write!(f, "Provider for category '{category}' failed: {reason}")
            }
            CatalogError::UnregisteredCategory(category) => {
                write!(f, "No provider registered for category '{category}'")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
