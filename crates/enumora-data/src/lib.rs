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

//! # Enumora Data
//!
//! The name-indexed catalog registry and the data structures derived from it:
//! per-category snapshots, the disambiguated display-name index, and the
//! headless picker model editors build their dropdowns from.

#![warn(missing_docs)]

pub mod assign;
pub mod display_names;
pub mod picker;
pub mod registry;
pub mod static_provider;

pub use assign::assign_if_missing_or_renamed;
pub use display_names::{compute_display_names, compute_display_names_reserving, DisplayNames};
pub use picker::PickerChoices;
pub use registry::{Registry, Snapshot};
pub use static_provider::StaticProvider;
