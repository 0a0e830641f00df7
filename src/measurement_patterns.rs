//! # Measurement Patterns Module
//!
//! This module contains the unit vocabulary and the regex patterns used to pull
//! quantities and units off the front of an ingredient line.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Raw unit spellings and abbreviations mapped to their singular form
pub const UNIT_SPELLINGS: &[(&str, &str)] = &[
    ("tbsp", "tablespoon"),
    ("tbsps", "tablespoon"),
    ("tbs", "tablespoon"),
    ("tb", "tablespoon"),
    ("t", "tablespoon"),
    ("tablespoons", "tablespoon"),
    ("tablespoon", "tablespoon"),
    ("tsp", "teaspoon"),
    ("tsps", "teaspoon"),
    ("ts", "teaspoon"),
    ("t.", "teaspoon"),
    ("teaspoons", "teaspoon"),
    ("teaspoon", "teaspoon"),
    ("cup", "cup"),
    ("cups", "cup"),
    ("c", "cup"),
    ("c.", "cup"),
    ("ounce", "ounce"),
    ("ounces", "ounce"),
    ("oz", "ounce"),
    ("oz.", "ounce"),
    ("pound", "pound"),
    ("pounds", "pound"),
    ("lb", "pound"),
    ("lbs", "pound"),
    ("lb.", "pound"),
    ("lbs.", "pound"),
    ("gram", "gram"),
    ("grams", "gram"),
    ("g", "gram"),
    ("g.", "gram"),
    ("kilogram", "kilogram"),
    ("kilograms", "kilogram"),
    ("kg", "kilogram"),
    ("kg.", "kilogram"),
    ("milliliter", "milliliter"),
    ("milliliters", "milliliter"),
    ("ml", "milliliter"),
    ("ml.", "milliliter"),
    ("liter", "liter"),
    ("liters", "liter"),
    ("l", "liter"),
    ("l.", "liter"),
    ("piece", "piece"),
    ("pieces", "piece"),
    ("pc", "piece"),
    ("pcs", "piece"),
    ("slice", "slice"),
    ("slices", "slice"),
    ("clove", "clove"),
    ("cloves", "clove"),
    ("bunch", "bunch"),
    ("bunches", "bunch"),
    ("sheet", "sheet"),
    ("sheets", "sheet"),
];

/// Plural spellings that are kept as written instead of being singularized
pub const PLURAL_UNITS: &[&str] = &[
    "tablespoons",
    "teaspoons",
    "cups",
    "ounces",
    "pounds",
    "grams",
    "kilograms",
    "milliliters",
    "liters",
    "pieces",
    "slices",
    "cloves",
    "bunches",
    "sheets",
];

/// Non-measurable quantity words that match like units but are never normalized
pub const SPECIAL_UNITS: &[&str] = &["pinch", "dash", "handful", "to taste"];

/// Unicode vulgar fractions and their ASCII equivalents
pub const UNICODE_FRACTIONS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// Build the unit alternation used by every quantity pattern.
///
/// Spellings are ordered longest first so that "cups" wins over "cup" and "c".
/// Spellings ending in a letter must end on a word boundary, which keeps "g"
/// from matching the start of "garlic".
fn build_unit_pattern() -> String {
    let mut spellings: Vec<&str> = UNIT_SPELLINGS
        .iter()
        .flat_map(|(raw, singular)| [*raw, *singular])
        .chain(SPECIAL_UNITS.iter().copied())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    spellings.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    spellings
        .iter()
        .map(|spelling| {
            let escaped = regex::escape(spelling);
            if spelling.ends_with(|c: char| c.is_alphanumeric()) {
                format!(r"{escaped}\b")
            } else {
                escaped
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    pub static ref UNIT_MAPPINGS: HashMap<&'static str, &'static str> =
        UNIT_SPELLINGS.iter().copied().collect();

    pub static ref UNIT_PATTERN: String = build_unit_pattern();

    /// A digit immediately followed by a unit, e.g. "500grams"
    pub static ref GLUED_UNIT_REGEX: Regex =
        Regex::new(&format!(r"(?i)(\d)({})", *UNIT_PATTERN))
            .expect("Glued unit pattern should be valid");

    /// Parenthesized asides such as "(about 2 cups)"
    pub static ref PARENTHESIZED_REGEX: Regex =
        Regex::new(r"\([^)]*\)").expect("Parenthesis pattern should be valid");

    /// "1/3 cup"
    pub static ref FRACTION_WITH_UNIT_REGEX: Regex =
        Regex::new(&format!(r"(?i)^(\d+/\d+)\s+({})", *UNIT_PATTERN))
            .expect("Fraction pattern should be valid");

    /// "1 - 5 tablespoons"
    pub static ref RANGE_WITH_UNIT_REGEX: Regex =
        Regex::new(&format!(r"(?i)^(\d+\s*-\s*\d+)\s+({})", *UNIT_PATTERN))
            .expect("Range pattern should be valid");

    /// "3 1/2 tablespoons"
    pub static ref MIXED_FRACTION_WITH_UNIT_REGEX: Regex =
        Regex::new(&format!(r"(?i)^(\d+\s+\d+/\d+)\s+({})", *UNIT_PATTERN))
            .expect("Mixed fraction pattern should be valid");

    /// Optional quantity, optional unit, optional "of"
    pub static ref GENERAL_REGEX: Regex = Regex::new(&format!(
        r"(?i)^((?P<qty>\d+\s+\d+/\d+|\d+/\d+|\d+\s*-\s*\d+|\d+(?:\.\d+)?)?\s*(?P<unit>{})?(?:\s+of\b)?\s*)",
        *UNIT_PATTERN
    ))
    .expect("General ingredient pattern should be valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_plural_is_a_known_spelling() {
        for plural in PLURAL_UNITS {
            assert!(UNIT_MAPPINGS.contains_key(plural), "missing plural: {plural}");
        }
    }

    #[test]
    fn test_unit_pattern_prefers_longest_spelling() {
        let pattern = UNIT_PATTERN.as_str();
        let cups = pattern.find(r"cups\b").unwrap();
        let cup = pattern.find(r"|cup\b").unwrap();
        assert!(cups < cup);
        assert!(pattern.contains(r"t\."));
        assert!(pattern.contains(r"to taste\b"));
    }

    #[test]
    fn test_general_regex_captures_parts() {
        let caps = GENERAL_REGEX.captures("2 cups of flour").unwrap();
        assert_eq!(&caps["qty"], "2");
        assert_eq!(&caps["unit"], "cups");
        assert_eq!(&caps[1], "2 cups of ");

        let caps = GENERAL_REGEX.captures("garlic cloves").unwrap();
        assert!(caps.name("unit").is_none());
        assert_eq!(&caps[1], "");
    }

    #[test]
    fn test_glued_unit_regex() {
        assert!(GLUED_UNIT_REGEX.is_match("500grams"));
        assert!(GLUED_UNIT_REGEX.is_match("2TBSP"));
        assert!(!GLUED_UNIT_REGEX.is_match("2large eggs"));
        assert!(!GLUED_UNIT_REGEX.is_match("500 grams"));
    }
}
