//! # Grocery Categorizer
//!
//! Assigns an ingredient name to one of the fixed food categories by keyword
//! matching. Keywords match anywhere in the lower-cased name and categories are
//! tested in a fixed order, so a name that hits several keyword lists lands in
//! the first one: "black pepper" is Produce, not Herbs & Spices.
//!
//! ```rust
//! use grocery_list::categorizer::categorize;
//! use grocery_list::grocery_model::Category;
//!
//! assert_eq!(categorize("Chicken Breast"), Category::MeatSeafood);
//! assert_eq!(categorize("xyzzy"), Category::Other);
//! ```

use crate::grocery_model::Category;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

pub const PRODUCE_KEYWORDS: &[&str] = &[
    "apple", "banana", "orange", "strawberr", "blueberr", "raspberr", "lemon", "lime", "grape",
    "melon", "peach", "pear", "plum", "apricot", "cherry", "kiwi", "pineapple", "tomato",
    "potato", "onion", "garlic", "lettuce", "spinach", "kale", "cabbage", "carrot", "broccoli",
    "pepper", "celery", "cucumber", "avocado", "zucchini", "squash", "mushroom", "eggplant",
];

pub const MEAT_SEAFOOD_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "turkey", "lamb", "fish", "salmon", "tuna", "shrimp", "crab",
    "lobster", "meat", "steak", "ground",
];

pub const DAIRY_EGGS_KEYWORDS: &[&str] = &[
    "milk", "cream", "cheese", "butter", "yogurt", "egg", "margarine", "sour cream",
    "cream cheese",
];

pub const BAKERY_KEYWORDS: &[&str] = &[
    "bread", "bun", "roll", "bagel", "tortilla", "pita", "croissant", "muffin", "cake", "pastry",
    "dough",
];

pub const PANTRY_KEYWORDS: &[&str] = &[
    "rice", "pasta", "noodle", "flour", "sugar", "salt", "vinegar", "oil", "sauce", "syrup",
    "honey", "peanut butter", "jam", "jelly", "cereal", "oat", "bean", "lentil", "chickpea",
    "corn", "pea", "canned", "condiment", "ketchup", "mustard", "mayonnaise",
];

pub const FROZEN_KEYWORDS: &[&str] = &["frozen", "ice", "ice cream"];

pub const BEVERAGES_KEYWORDS: &[&str] = &[
    "water", "juice", "soda", "coffee", "tea", "wine", "beer", "alcohol", "drink", "beverage",
];

pub const HERBS_SPICES_KEYWORDS: &[&str] = &[
    "pepper", "salt", "oregano", "basil", "thyme", "rosemary", "cumin", "paprika", "cinnamon",
    "nutmeg", "ginger", "garlic powder", "onion powder", "bay leaf", "curry", "chili", "spice",
    "herb",
];

fn keyword_regex(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("Category keyword pattern should be valid")
}

lazy_static! {
    /// Category patterns in the order they are tested
    static ref CATEGORY_PATTERNS: Vec<(Category, Regex)> = vec![
        (Category::Produce, keyword_regex(PRODUCE_KEYWORDS)),
        (Category::MeatSeafood, keyword_regex(MEAT_SEAFOOD_KEYWORDS)),
        (Category::DairyEggs, keyword_regex(DAIRY_EGGS_KEYWORDS)),
        (Category::Bakery, keyword_regex(BAKERY_KEYWORDS)),
        (Category::Pantry, keyword_regex(PANTRY_KEYWORDS)),
        (Category::Frozen, keyword_regex(FROZEN_KEYWORDS)),
        (Category::Beverages, keyword_regex(BEVERAGES_KEYWORDS)),
        (Category::HerbsSpices, keyword_regex(HERBS_SPICES_KEYWORDS)),
    ];
}

/// Categorize an ingredient name, falling back to `Category::Other`
pub fn categorize(name: &str) -> Category {
    let lower = name.to_lowercase();
    let category = CATEGORY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&lower))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other);

    trace!("Categorized '{}' as {}", name, category);
    category
}

/// Every category whose keywords match the name, in test order.
///
/// The first entry is what `categorize` returns; more than one entry means the
/// name is ambiguous.
pub fn matching_categories(name: &str) -> Vec<Category> {
    let lower = name.to_lowercase();
    CATEGORY_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&lower))
        .map(|(category, _)| *category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_categories() {
        assert_eq!(categorize("Bananas"), Category::Produce);
        assert_eq!(categorize("chicken breast"), Category::MeatSeafood);
        assert_eq!(categorize("Greek Yogurt"), Category::DairyEggs);
        assert_eq!(categorize("Bagels"), Category::Bakery);
        assert_eq!(categorize("flour"), Category::Pantry);
        assert_eq!(categorize("Frozen Spinach"), Category::Produce);
        assert_eq!(categorize("Ice"), Category::Frozen);
        assert_eq!(categorize("Sparkling Water"), Category::Beverages);
        assert_eq!(categorize("Cinnamon"), Category::HerbsSpices);
        assert_eq!(categorize("xyzzy"), Category::Other);
    }

    #[test]
    fn test_order_resolves_overlaps() {
        assert_eq!(categorize("Black Pepper"), Category::Produce);
        assert_eq!(categorize("Salt"), Category::Pantry);
        assert_eq!(
            matching_categories("black pepper"),
            vec![Category::Produce, Category::HerbsSpices]
        );
    }

    #[test]
    fn test_substring_matching() {
        assert_eq!(categorize("Strawberries"), Category::Produce);
        assert_eq!(categorize("Ground Cinnamon"), Category::MeatSeafood);
        assert!(matching_categories("xyzzy").is_empty());
    }

    #[test]
    fn test_categorize_is_deterministic() {
        for name in ["Olive Oil", "Eggs", "Red Wine", "Bay Leaf", ""] {
            assert_eq!(categorize(name), categorize(name));
        }
    }
}
