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

//! # Enumora Core
//!
//! Foundational crate containing the catalog entry types, the provider
//! contract, and the error hierarchy shared by every Enumora crate.
//!
//! A *scriptable enum* is a named data asset standing in for an enum value:
//! the valid values of a kind are whatever entries its provider currently
//! lists. This crate only defines the vocabulary; caching and lookup live in
//! `enumora-data`.

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod provider;

pub use catalog::{normalize_name, CatalogEntry, CatalogKind, Category, EntryId};
pub use config::RegistryConfig;
pub use error::{CatalogError, CatalogResult};
pub use provider::{EntryProvider, ProviderError};
