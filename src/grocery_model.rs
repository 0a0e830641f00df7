//! # Grocery Data Model
//!
//! This module defines the data structures shared by the parser, the categorizer
//! and the grocery list collection.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredient**: The transient `{name, quantity, unit}` result of parsing one line
//! - **Category**: One of nine fixed food categories, in display order
//! - **GroceryItem**: A persisted entry on the shopping list
//! - **ItemUpdate**: A partial update applied to an existing item
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::grocery_model::{Category, NewGroceryItem};
//!
//! let milk = NewGroceryItem::new("Milk", Category::DairyEggs)
//!     .with_quantity("1", "liter");
//! assert_eq!(milk.quantity, "1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of parsing a single ingredient line
///
/// Quantities keep their original notation ("1/2", "3 1/2", "1-5", "2.5").
/// An all-empty value marks a line that should be skipped (section headers, blank lines).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Title-cased ingredient name (e.g., "Olive Oil")
    pub name: String,
    /// Quantity as written, or empty
    pub quantity: String,
    /// Normalized unit, preserved plural, special word, or empty
    pub unit: String,
}

impl ParsedIngredient {
    /// Create a parsed ingredient from its three parts
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// The value returned for header lines
    pub fn header() -> Self {
        Self::default()
    }

    /// A parsed line with a name only
    pub fn name_only(name: impl Into<String>) -> Self {
        Self::new(name, "", "")
    }

    /// Check whether this result should be skipped by the caller
    pub fn is_header(&self) -> bool {
        self.name.is_empty() && self.quantity.is_empty() && self.unit.is_empty()
    }

    /// Check if a quantity was extracted
    pub fn has_quantity(&self) -> bool {
        !self.quantity.is_empty()
    }
}

/// Food categories in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Produce")]
    Produce,
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    #[serde(rename = "Dairy & Eggs")]
    DairyEggs,
    #[serde(rename = "Bakery")]
    Bakery,
    #[serde(rename = "Pantry")]
    Pantry,
    #[serde(rename = "Frozen")]
    Frozen,
    #[serde(rename = "Beverages")]
    Beverages,
    #[serde(rename = "Herbs & Spices")]
    HerbsSpices,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in display/sort order
    pub const ALL: [Category; 9] = [
        Category::Produce,
        Category::MeatSeafood,
        Category::DairyEggs,
        Category::Bakery,
        Category::Pantry,
        Category::Frozen,
        Category::Beverages,
        Category::HerbsSpices,
        Category::Other,
    ];

    /// Get the human-readable name of the category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::MeatSeafood => "Meat & Seafood",
            Category::DairyEggs => "Dairy & Eggs",
            Category::Bakery => "Bakery",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::HerbsSpices => "Herbs & Spices",
            Category::Other => "Other",
        }
    }

    /// Position of the category in display order
    pub fn sort_index(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Category::ALL.len())
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(wanted.to_string()))
    }
}

/// An entry on the grocery list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Unique, immutable identifier
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: Category,
    pub checked: bool,
    /// Set only for items imported from a recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<String>,
}

impl GroceryItem {
    /// Check whether this item belongs to the given recipe
    pub fn is_from_recipe(&self, recipe_id: &str) -> bool {
        self.recipe_id.as_deref() == Some(recipe_id)
    }

    /// Case-insensitive name comparison used for merge deduplication
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", if self.checked { "x" } else { " " })?;

        let amount = [self.quantity.as_str(), self.unit.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        if amount.is_empty() {
            write!(f, "{}", self.name)?;
        } else {
            write!(f, "{} {}", amount, self.name)?;
        }

        if let Some(recipe_name) = &self.recipe_name {
            write!(f, " ({})", recipe_name)?;
        }

        Ok(())
    }
}

/// A grocery item before it has been given an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroceryItem {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: Category,
    pub recipe_id: Option<String>,
    pub recipe_name: Option<String>,
}

impl NewGroceryItem {
    /// Create a new item with just a name and category
    pub fn new(name: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            quantity: String::new(),
            unit: String::new(),
            category,
            recipe_id: None,
            recipe_name: None,
        }
    }

    /// Set the quantity and unit
    pub fn with_quantity(mut self, quantity: &str, unit: &str) -> Self {
        self.quantity = quantity.to_string();
        self.unit = unit.to_string();
        self
    }

    /// Attach the recipe this item was imported from
    pub fn with_recipe(mut self, recipe_id: &str, recipe_name: &str) -> Self {
        self.recipe_id = Some(recipe_id.to_string());
        self.recipe_name = Some(recipe_name.to_string());
        self
    }

    /// Turn this into a stored item with the given id
    pub fn into_item(self, id: String) -> GroceryItem {
        GroceryItem {
            id,
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            category: self.category,
            checked: false,
            recipe_id: self.recipe_id,
            recipe_name: self.recipe_name,
        }
    }
}

/// Partial update for an existing grocery item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub category: Option<Category>,
    pub checked: Option<bool>,
}

impl ItemUpdate {
    /// Update that only replaces quantity and unit
    pub fn quantity(quantity: &str, unit: &str) -> Self {
        Self {
            quantity: Some(quantity.to_string()),
            unit: Some(unit.to_string()),
            ..Default::default()
        }
    }

    /// Apply the supplied fields to an item, leaving its id untouched
    pub fn apply_to(&self, item: &mut GroceryItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(quantity) = &self.quantity {
            item.quantity = quantity.clone();
        }
        if let Some(unit) = &self.unit {
            item.unit = unit.clone();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(checked) = self.checked {
            item.checked = checked;
        }
    }
}

/// Items of one category, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrocerySection {
    pub category: Category,
    pub items: Vec<GroceryItem>,
}

impl fmt::Display for GrocerySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}):", self.category, self.items.len())?;
        for item in &self.items {
            writeln!(f, "  {}", item)?;
        }
        Ok(())
    }
}
