//! # Text Processing Module
//!
//! Line preprocessing and name clean-up shared by the ingredient parser.
//!
//! ## Features
//!
//! - Section header detection ("For the sauce:")
//! - Removal of header prefixes and parenthesized asides
//! - Unicode fraction replacement ("½" -> "1/2")
//! - Splitting of digits glued to units ("500grams" -> "500 grams")
//! - Title-casing of ingredient names

use crate::measurement_patterns::{GLUED_UNIT_REGEX, PARENTHESIZED_REGEX, UNICODE_FRACTIONS};
use log::trace;

/// Lines shorter than this that end with ':' are section headers
pub const HEADER_MAX_LENGTH: usize = 25;

/// Check whether a raw line is a section header such as "Sauce:"
pub fn is_section_header(line: &str) -> bool {
    line.trim().ends_with(':') && line.chars().count() < HEADER_MAX_LENGTH
}

/// Drop everything up to and including the first ':'
pub fn strip_header_prefix(line: &str) -> &str {
    match line.find(':') {
        Some(pos) => line[pos + 1..].trim(),
        None => line,
    }
}

/// Remove parenthesized asides such as "(about 2 cups)"
pub fn remove_parenthesized(line: &str) -> String {
    PARENTHESIZED_REGEX.replace_all(line, "").trim().to_string()
}

/// Replace Unicode vulgar fractions with slash fractions.
///
/// A fraction glyph that directly follows a digit becomes the fractional part
/// of a mixed number: "1½" -> "1 1/2".
pub fn replace_unicode_fractions(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    for c in line.chars() {
        match UNICODE_FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => {
                if result.ends_with(|prev: char| prev.is_ascii_digit()) {
                    result.push(' ');
                }
                result.push_str(ascii);
            }
            None => result.push(c),
        }
    }
    result
}

/// Insert a space between a number and a unit written against it
pub fn separate_glued_units(line: &str) -> String {
    GLUED_UNIT_REGEX.replace_all(line, "$1 $2").into_owned()
}

/// Run every preprocessing step, in order, on a non-header line
pub fn preprocess_line(line: &str) -> String {
    let without_header = strip_header_prefix(line);
    let without_asides = remove_parenthesized(without_header);
    let with_fractions = replace_unicode_fractions(&without_asides);
    let processed = separate_glued_units(&with_fractions);

    if processed != line {
        trace!("Preprocessed line: '{}' -> '{}'", line, processed);
    }
    processed
}

/// Upper-case the first letter of every word and lower-case the rest
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Strip a leading "of " (any case)
pub fn strip_of_prefix(text: &str) -> &str {
    match text.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("of ") => text[3..].trim_start(),
        _ => text,
    }
}

/// Strip a trailing standalone "of" (any case)
pub fn strip_of_suffix(text: &str) -> &str {
    let trimmed = text.trim_end();
    match trimmed.rsplit_once(char::is_whitespace) {
        Some((head, last)) if last.eq_ignore_ascii_case("of") => head.trim_end(),
        _ if trimmed.eq_ignore_ascii_case("of") => "",
        _ => trimmed,
    }
}

/// Turn the text left after the quantity and unit into a display name
pub fn clean_ingredient_name(remainder: &str) -> String {
    let name = remainder
        .trim()
        .trim_start_matches(|c: char| c == '.' || c == ',')
        .trim_start();
    title_case(strip_of_prefix(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_header_detection() {
        assert!(is_section_header("Sauce:"));
        assert!(is_section_header("  For the dough:  "));
        assert!(!is_section_header("For the very long marinade:"));
        assert!(!is_section_header("2 cups flour"));
        assert!(!is_section_header(""));
    }

    #[test]
    fn test_strip_header_prefix() {
        assert_eq!(strip_header_prefix("Topping: 1 cup cream"), "1 cup cream");
        assert_eq!(strip_header_prefix("1 cup cream"), "1 cup cream");
    }

    #[test]
    fn test_remove_parenthesized() {
        assert_eq!(remove_parenthesized("2 onions (about 2 cups) diced"), "2 onions  diced");
        assert_eq!(remove_parenthesized("(optional) parsley"), "parsley");
    }

    #[test]
    fn test_replace_unicode_fractions() {
        assert_eq!(replace_unicode_fractions("½ cup flour"), "1/2 cup flour");
        assert_eq!(replace_unicode_fractions("¾ tsp salt"), "3/4 tsp salt");
        assert_eq!(replace_unicode_fractions("1½ cups milk"), "1 1/2 cups milk");
        assert_eq!(replace_unicode_fractions("no fractions"), "no fractions");
    }

    #[test]
    fn test_separate_glued_units() {
        assert_eq!(separate_glued_units("500grams chicken"), "500 grams chicken");
        assert_eq!(separate_glued_units("2Tbsp oil"), "2 Tbsp oil");
        assert_eq!(separate_glued_units("1/2cup sugar"), "1/2 cup sugar");
        assert_eq!(separate_glued_units("2large eggs"), "2large eggs");
    }

    #[test]
    fn test_preprocess_line() {
        assert_eq!(preprocess_line("Dough: 500g flour (sifted)"), "500 g flour");
        assert_eq!(preprocess_line("½ cup flour"), "1/2 cup flour");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("olive oil"), "Olive Oil");
        assert_eq!(title_case("ALL-PURPOSE  flour"), "All-purpose Flour");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_of_prefix_and_suffix() {
        assert_eq!(strip_of_prefix("of salt"), "salt");
        assert_eq!(strip_of_prefix("Of salt"), "salt");
        assert_eq!(strip_of_prefix("offal"), "offal");
        assert_eq!(strip_of_suffix("Pinch of"), "Pinch");
        assert_eq!(strip_of_suffix("2 of "), "2");
        assert_eq!(strip_of_suffix("of"), "");
        assert_eq!(strip_of_suffix("2 cups"), "2 cups");
    }

    #[test]
    fn test_clean_ingredient_name() {
        assert_eq!(clean_ingredient_name(" of olive oil"), "Olive Oil");
        assert_eq!(clean_ingredient_name(". sugar"), "Sugar");
        assert_eq!(clean_ingredient_name(""), "");
    }
}
