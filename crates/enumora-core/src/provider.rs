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

//! The contract between the registry and the host's asset index.

use crate::catalog::{CatalogEntry, Category};
use std::error::Error;

/// Error type returned by providers.
pub type ProviderError = Box<dyn Error + Send + Sync>;

/// A source of the raw entries of a category.
///
/// Implemented by the host's asset index. A listing is a snapshot read: its
/// order is only guaranteed to be stable within a single call.
pub trait EntryProvider: Send + Sync {
    /// Lists every entry currently belonging to `category`.
    fn list_entries(&self, category: &Category) -> Result<Vec<CatalogEntry>, ProviderError>;
}

impl<F> EntryProvider for F
where
    F: Fn(&Category) -> Result<Vec<CatalogEntry>, ProviderError> + Send + Sync,
{
    fn list_entries(&self, category: &Category) -> Result<Vec<CatalogEntry>, ProviderError> {
        self(category)
    }
}
