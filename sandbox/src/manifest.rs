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

//! The `Catalog.toml` manifest describing the sandbox's entries.

use anyhow::{Context, Result};
use enumora_core::{CatalogEntry, Category, RegistryConfig};
use enumora_data::StaticProvider;
use serde::Deserialize;
use std::path::Path;

/// Represents the structure of the `Catalog.toml` manifest file.
#[derive(Deserialize, Debug, Default)]
pub struct CatalogManifest {
    /// Registry tunables.
    #[serde(default)]
    pub config: RegistryConfig,
    /// Every entry, in listing order.
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,
}

/// One `[[entries]]` row.
#[derive(Deserialize, Debug)]
pub struct ManifestEntry {
    /// Category the entry belongs to.
    pub category: Category,
    /// Stable key the entry id is derived from (usually the asset path).
    pub key: String,
    /// Raw entry name, not necessarily unique within its category.
    pub name: String,
}

impl CatalogManifest {
    /// Reads the manifest at `path`.
    ///
    /// A missing file yields the default (empty) manifest.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::warn!(
                "Manifest {} not found, starting with an empty catalog",
                path.display()
            );
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }

    /// Categories declared by the manifest, in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for entry in &self.entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        categories
    }

    /// Moves the entries into an in-memory provider.
    pub fn into_provider(self) -> (RegistryConfig, StaticProvider) {
        let provider = self
            .entries
            .into_iter()
            .map(|row| (row.category, CatalogEntry::keyed(&row.key, row.name)))
            .collect();
        (self.config, provider)
    }
}
