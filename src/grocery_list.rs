//! # Grocery List
//!
//! The caller-owned collection of grocery items and the recipe import that
//! merges parsed ingredients into it.
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::grocery_list::GroceryList;
//!
//! let mut list = GroceryList::new();
//! list.add_items_from_recipe("r1", "Cake", &["2 cups flour", "Frosting:", "1 cup butter"]);
//! list.add_items_from_recipe("r1", "Cake", &["3 cups flour"]);
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.recipe_items("r1")[0].quantity, "3");
//! ```

use crate::categorizer::categorize;
use crate::grocery_model::{Category, GroceryItem, GrocerySection, ItemUpdate, NewGroceryItem};
use crate::ingredient_parser::parse_ingredient;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome counts of a recipe import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
    /// Header and blank lines
    pub skipped: usize,
}

/// Ordered collection of grocery items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

impl GroceryList {
    /// Create an empty grocery list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wrap items loaded from storage
    pub fn from_items(items: Vec<GroceryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<GroceryItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Generate an id that no current item uses.
    ///
    /// Base-36 millisecond timestamp followed by a base-36 random suffix.
    fn generate_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let millis = Utc::now().timestamp_millis().max(0) as u64;
            let id = format!("{}{}", to_base36(millis), to_base36(rng.gen::<u64>()));
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Add a new item; it gets a fresh id and starts unchecked
    pub fn add_item(&mut self, item: NewGroceryItem) -> &GroceryItem {
        let id = self.generate_id();
        debug!(id = %id, name = %item.name, "Adding grocery item");
        self.items.push(item.into_item(id));
        &self.items[self.items.len() - 1]
    }

    /// Parse and categorize a manually typed line such as "2 lbs potatoes".
    ///
    /// Returns `None` when the line has no ingredient name (headers, blank lines).
    pub fn add_item_from_text(&mut self, line: &str) -> Option<&GroceryItem> {
        let parsed = parse_ingredient(line);
        if parsed.name.is_empty() {
            debug!(line = %line, "Ignoring line without an ingredient name");
            return None;
        }
        let category = categorize(&parsed.name);
        let item = NewGroceryItem::new(&parsed.name, category).with_quantity(&parsed.quantity, &parsed.unit);
        Some(self.add_item(item))
    }

    /// Remove an item; returns whether it existed
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        debug!(id = %id, removed, "Removing grocery item");
        removed
    }

    /// Apply a partial update; returns whether the item existed
    pub fn update_item(&mut self, id: &str, update: &ItemUpdate) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                update.apply_to(item);
                true
            }
            None => false,
        }
    }

    /// Flip the checked flag; returns the new state, or `None` for an unknown id
    pub fn toggle_checked(&mut self, id: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    /// Remove every checked item; returns how many were removed
    pub fn clear_checked_items(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        let removed = before - self.items.len();
        info!(removed, "Cleared checked grocery items");
        removed
    }

    pub fn clear_all_items(&mut self) {
        info!(removed = self.items.len(), "Cleared all grocery items");
        self.items.clear();
    }

    /// Items imported from one recipe, in list order
    pub fn recipe_items(&self, recipe_id: &str) -> Vec<&GroceryItem> {
        self.items
            .iter()
            .filter(|item| item.is_from_recipe(recipe_id))
            .collect()
    }

    /// Parse, categorize and merge a recipe's ingredient lines.
    ///
    /// An ingredient already on the list for the same recipe (name compared
    /// case-insensitively) has its quantity and unit overwritten; otherwise a
    /// new item is added. Lines are processed in order, so the last duplicate wins.
    pub fn add_items_from_recipe<S: AsRef<str>>(
        &mut self,
        recipe_id: &str,
        recipe_name: &str,
        ingredient_lines: &[S],
    ) -> ImportSummary {
        let mut summary = ImportSummary::default();

        for line in ingredient_lines {
            let parsed = parse_ingredient(line.as_ref());
            if parsed.name.is_empty() {
                summary.skipped += 1;
                continue;
            }

            let existing = self
                .items
                .iter_mut()
                .find(|item| item.has_name(&parsed.name) && item.is_from_recipe(recipe_id));

            match existing {
                Some(item) => {
                    ItemUpdate::quantity(&parsed.quantity, &parsed.unit).apply_to(item);
                    summary.updated += 1;
                }
                None => {
                    let category = categorize(&parsed.name);
                    let item = NewGroceryItem::new(&parsed.name, category)
                        .with_quantity(&parsed.quantity, &parsed.unit)
                        .with_recipe(recipe_id, recipe_name);
                    self.add_item(item);
                    summary.added += 1;
                }
            }
        }

        info!(
            recipe_id = %recipe_id,
            added = summary.added,
            updated = summary.updated,
            skipped = summary.skipped,
            "Imported recipe ingredients"
        );
        summary
    }

    /// Items grouped by category in display order, sorted by name within each group.
    ///
    /// Checked items are left out unless `include_checked` is set; empty
    /// categories are omitted.
    pub fn sections(&self, include_checked: bool) -> Vec<GrocerySection> {
        let mut items: Vec<&GroceryItem> = self
            .items
            .iter()
            .filter(|item| include_checked || !item.checked)
            .collect();
        items.sort_by(|a, b| {
            a.category
                .sort_index()
                .cmp(&b.category.sort_index())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        Category::ALL
            .iter()
            .map(|category| GrocerySection {
                category: *category,
                items: items
                    .iter()
                    .filter(|item| item.category == *category)
                    .map(|item| (*item).clone())
                    .collect(),
            })
            .filter(|section| !section.items.is_empty())
            .collect()
    }
}
