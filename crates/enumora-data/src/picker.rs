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

//! Headless model of an entry picker (the dropdown an editor shows for a
//! scriptable-enum field).

use crate::display_names::{compute_display_names_reserving, DisplayNames};
use crate::registry::Snapshot;
use enumora_core::{CatalogEntry, CatalogError, CatalogResult, Category, EntryId};
use std::sync::Arc;

/// The choices offered for a field of one category.
///
/// The first label clears the selection; the rest are the category's
/// display names in provider order. The null label is never handed to an
/// entry: one named like it is shown with a counter suffix instead.
#[derive(Debug, Clone)]
pub struct PickerChoices {
    category: Category,
    null_label: String,
    labels: Vec<String>,
    names: Arc<DisplayNames>,
}

impl PickerChoices {
    /// Builds the choices for a category from its entries in provider order.
    pub fn new(category: Category, entries: &[CatalogEntry], null_label: &str) -> Self {
        let names = compute_display_names_reserving(entries, &[null_label]);
        Self::with_names(category, Arc::new(names), null_label)
    }

    /// Reuses the snapshot's index unless an entry took the null label.
    pub(crate) fn from_snapshot(
        category: Category,
        snapshot: &Snapshot,
        null_label: &str,
    ) -> Self {
        let names = snapshot.display_names();
        if names.entry_for(null_label).is_some() {
            log::debug!(
                "An entry of '{}' is named like the null label '{}', renaming it",
                category,
                null_label
            );
            return Self::new(category, snapshot.entries(), null_label);
        }
        Self::with_names(category, names.clone(), null_label)
    }

    fn with_names(category: Category, names: Arc<DisplayNames>, null_label: &str) -> Self {
        let labels = std::iter::once(null_label.to_string())
            .chain(names.names().map(str::to_string))
            .collect();
        Self {
            category,
            null_label: null_label.to_string(),
            labels,
            names,
        }
    }

    /// All labels, null label first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The category these choices belong to.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// A picker is only useful once there is something besides the null
    /// choice to pick.
    pub fn is_enabled(&self) -> bool {
        self.labels.len() > 1
    }

    /// Maps a chosen label back to the entry it stands for.
    ///
    /// The null label resolves to `None`.
    pub fn resolve(&self, label: &str) -> CatalogResult<Option<EntryId>> {
        if label == self.null_label {
            return Ok(None);
        }
        self.names
            .entry_for(label)
            .map(Some)
            .ok_or_else(|| CatalogError::NotFound {
                category: Some(self.category.clone()),
                query: label.to_string(),
            })
    }

    /// The label to show for the current selection.
    ///
    /// An entry missing from the index (deleted or renamed since the last
    /// refresh) is shown under its raw name; an unnamed one as the null
    /// label.
    pub fn label_for(&self, selected: Option<&CatalogEntry>) -> String {
        let Some(entry) = selected else {
            return self.null_label.clone();
        };
        if let Some(display_name) = self.names.name_for(&entry.id) {
            return display_name.to_string();
        }

        log::debug!(
            "Entry {} is not in the '{}' snapshot, showing its raw name",
            entry.id,
            self.category
        );
        if entry.name.is_empty() {
            self.null_label.clone()
        } else {
            entry.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> PickerChoices {
        let entries = [
            CatalogEntry::keyed("a1", "Red"),
            CatalogEntry::keyed("a2", "Red"),
            CatalogEntry::keyed("a3", "Blue"),
        ];
        PickerChoices::new(Category::new("Color"), &entries, "<null>")
    }

    #[test]
    fn test_labels_start_with_null_choice() {
        let choices = choices();

        assert_eq!(choices.labels(), ["<null>", "Red", "Red (2)", "Blue"]);
        assert!(choices.is_enabled());
    }

    #[test]
    fn test_resolve_labels() {
        let choices = choices();

        assert_eq!(choices.resolve("<null>").unwrap(), None);
        assert_eq!(
            choices.resolve("Red (2)").unwrap(),
            Some(EntryId::from_key("a2"))
        );
        assert!(matches!(
            choices.resolve("Green"),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn test_label_for_selection() {
        let choices = choices();

        assert_eq!(choices.label_for(None), "<null>");
        assert_eq!(
            choices.label_for(Some(&CatalogEntry::keyed("a2", "Red"))),
            "Red (2)"
        );
        assert_eq!(
            choices.label_for(Some(&CatalogEntry::keyed("gone", "Purple"))),
            "Purple"
        );
        assert_eq!(
            choices.label_for(Some(&CatalogEntry::keyed("gone", ""))),
            "<null>"
        );
    }

    #[test]
    fn test_entry_named_like_null_label_stays_selectable() {
        let entries = [
            CatalogEntry::keyed("n", "<null>"),
            CatalogEntry::keyed("r", "Red"),
        ];
        let choices = PickerChoices::new(Category::new("Color"), &entries, "<null>");

        assert_eq!(choices.labels(), ["<null>", "<null> (2)", "Red"]);
        assert_eq!(choices.resolve("<null>").unwrap(), None);
        assert_eq!(
            choices.resolve("<null> (2)").unwrap(),
            Some(EntryId::from_key("n"))
        );
        assert_eq!(choices.label_for(Some(&entries[0])), "<null> (2)");
    }

    #[test]
    fn test_empty_category_disables_picker() {
        let choices = PickerChoices::new(Category::new("Mood"), &[], "None");

        assert_eq!(choices.labels(), ["None"]);
        assert!(!choices.is_enabled());
    }
}
