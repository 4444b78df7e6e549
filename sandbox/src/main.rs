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

// Enumora Sandbox
// Loads a catalog manifest and exercises the registry from the command line.

mod manifest;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use enumora_core::{Category, RegistryConfig};
use enumora_data::Registry;
use enumora_telemetry::{init_logging, CacheCounters};

use manifest::CatalogManifest;

#[derive(Parser, Debug)]
#[command(version, about = "Inspect a scriptable-enum catalog", long_about = None)]
struct Cli {
    /// Path to the catalog manifest.
    #[arg(long, default_value = "Catalog.toml")]
    manifest: PathBuf,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every entry of a category with its display name.
    List { category: String },
    /// Resolve an entry by exact (case-insensitive) name.
    Find { category: String, name: String },
    /// Resolve an entry by a name fragment, across all categories.
    Fragment { text: String },
    /// Print the picker choices of a category.
    Choices { category: String },
    /// Tell whether a category is small enough for a picker.
    Threshold {
        category: String,
        /// Overrides `picker_threshold` from the manifest.
        #[arg(long)]
        max: Option<usize>,
    },
}

fn build_registry(
    manifest: CatalogManifest,
    counters: Arc<CacheCounters>,
) -> (RegistryConfig, Registry) {
    let categories = manifest.categories();
    let (config, provider) = manifest.into_provider();
    let provider = Arc::new(provider);

    let registry = Registry::new().with_counters(counters);
    for category in categories {
        registry.register_provider(category, provider.clone());
    }
    (config, registry)
}

fn run(command: Command, config: &RegistryConfig, registry: &Registry) -> Result<()> {
    match command {
        Command::List { category } => {
            let category = Category::new(category);
            let snapshot = registry
                .snapshot(&category)
                .with_context(|| format!("Failed to list '{category}'"))?;
            for entry in snapshot.entries().iter() {
                let display = snapshot
                    .display_names()
                    .name_for(&entry.id)
                    .unwrap_or(entry.name.as_str());
                println!("{}  {}", entry.id, display);
            }
        }
        Command::Find { category, name } => {
            let entry = registry.get_by_name(&Category::new(category), &name)?;
            println!("{}  {}", entry.id, entry.name);
        }
        Command::Fragment { text } => {
            let entry = registry.get_by_text_fragment(&text)?;
            println!("{}  {}", entry.id, entry.name);
        }
        Command::Choices { category } => {
            let choices = registry.picker_choices(&Category::new(category), config)?;
            for label in choices.labels() {
                println!("{label}");
            }
            if !choices.is_enabled() {
                log::info!("Picker disabled: '{}' has no entries", choices.category());
            }
        }
        Command::Threshold { category, max } => {
            let threshold = max.unwrap_or(config.picker_threshold);
            let category = Category::new(category);
            if registry.exceeds_picker_threshold(&category, threshold)? {
                println!("'{category}' exceeds {threshold} entries: use a plain field");
            } else {
                println!("'{category}' fits in a picker (threshold {threshold})");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let manifest = CatalogManifest::load(&cli.manifest)?;
    let counters = Arc::new(CacheCounters::new());
    let (config, registry) = build_registry(manifest, counters.clone());

    run(cli.command, &config, &registry)?;

    let stats = counters.snapshot();
    log::debug!(
        "Registry stats: {} provider queries, {} cache hits",
        stats.provider_queries,
        stats.cache_hits
    );
    Ok(())
}
