//! # Grocery List
//!
//! Turns free-text recipe ingredient lines into categorized grocery items and
//! keeps them in a shopping list that merges repeated recipe imports.

pub mod categorizer;
pub mod config;
pub mod grocery_list;
pub mod grocery_model;
pub mod ingredient_parser;
pub mod measurement_patterns;
pub mod storage;
pub mod storage_errors;
pub mod text_processing;

pub use categorizer::categorize;
pub use grocery_list::{GroceryList, ImportSummary};
pub use grocery_model::{Category, GroceryItem, ItemUpdate, NewGroceryItem, ParsedIngredient};
pub use ingredient_parser::parse_ingredient;
