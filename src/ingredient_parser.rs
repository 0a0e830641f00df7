//! # Ingredient Parser
//!
//! This module turns free-text recipe ingredient lines into structured
//! `{name, quantity, unit}` records.
//!
//! ## Features
//!
//! - Section headers ("Sauce:") yield an empty result the caller skips
//! - Fractions (1/2), mixed fractions (3 1/2), ranges (1-5) and decimals (2.5)
//! - Unicode fractions and units glued to numbers ("½", "500grams")
//! - Unit normalization with plural preservation ("tbsp" -> "tablespoon", "cups" stays "cups")
//! - Non-measurable words: pinch, dash, handful, to taste
//!
//! Parsing never fails: anything that does not look like a quantity ends up in the name.
//!
//! ## Usage
//!
//! ```rust
//! use grocery_list::ingredient_parser::parse_ingredient;
//!
//! let parsed = parse_ingredient("3 1/2 tablespoons of olive oil");
//! assert_eq!(parsed.name, "Olive Oil");
//! assert_eq!(parsed.quantity, "3 1/2");
//! assert_eq!(parsed.unit, "tablespoons");
//! ```

use crate::grocery_model::ParsedIngredient;
use crate::measurement_patterns::{
    FRACTION_WITH_UNIT_REGEX, GENERAL_REGEX, MIXED_FRACTION_WITH_UNIT_REGEX, PLURAL_UNITS,
    RANGE_WITH_UNIT_REGEX, SPECIAL_UNITS, UNIT_MAPPINGS,
};
use crate::text_processing::{
    clean_ingredient_name, is_section_header, preprocess_line, strip_of_suffix, title_case,
};
use log::{debug, trace};
use regex::Regex;

/// A named parsing rule tried against a preprocessed line
pub struct MatchRule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<ParsedIngredient>,
}

/// Parsing rules in precedence order; the first rule that matches wins
pub static RULES: &[MatchRule] = &[
    MatchRule {
        name: "fraction-with-unit",
        apply: match_fraction_with_unit,
    },
    MatchRule {
        name: "range-with-unit",
        apply: match_range_with_unit,
    },
    MatchRule {
        name: "mixed-fraction-with-unit",
        apply: match_mixed_fraction_with_unit,
    },
    MatchRule {
        name: "general",
        apply: match_general,
    },
];

/// Parse a single ingredient line
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    if is_section_header(line) {
        debug!("Skipping section header: '{}'", line);
        return ParsedIngredient::header();
    }

    let processed = preprocess_line(line);

    for rule in RULES {
        if let Some(parsed) = (rule.apply)(&processed) {
            trace!("Rule '{}' matched '{}' -> {:?}", rule.name, processed, parsed);
            return parsed;
        }
    }

    trace!("No rule matched '{}', using the whole line as the name", processed);
    ParsedIngredient::name_only(title_case(&processed))
}

/// Parse every line of a multi-line ingredient list, dropping headers and blank lines
pub fn parse_ingredient_list(text: &str) -> Vec<ParsedIngredient> {
    text.lines()
        .map(parse_ingredient)
        .filter(|parsed| !parsed.name.is_empty())
        .collect()
}

/// Normalize a matched unit spelling.
///
/// Known plurals are kept as written (lower-cased); every other known spelling
/// becomes its singular form; anything else is just lower-cased.
pub fn normalize_unit(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    if PLURAL_UNITS.contains(&lower.as_str()) {
        return lower;
    }
    match UNIT_MAPPINGS.get(lower.as_str()) {
        Some(singular) => (*singular).to_string(),
        None => lower,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Shared body of the three "quantity then unit" rules
fn match_quantity_with_unit(
    regex: &Regex,
    line: &str,
    format_quantity: fn(&str) -> String,
) -> Option<ParsedIngredient> {
    let captures = regex.captures(line)?;
    let matched = captures.get(0)?;
    let quantity = format_quantity(captures.get(1)?.as_str().trim());
    let unit = normalize_unit(captures.get(2)?.as_str());
    let name = clean_ingredient_name(&line[matched.end()..]);
    Some(ParsedIngredient::new(name, quantity, unit))
}

/// "1/3 cup sugar"
fn match_fraction_with_unit(line: &str) -> Option<ParsedIngredient> {
    match_quantity_with_unit(&FRACTION_WITH_UNIT_REGEX, line, str::to_string)
}

/// "1 - 5 tablespoons sugar", quantity becomes "1-5"
fn match_range_with_unit(line: &str) -> Option<ParsedIngredient> {
    match_quantity_with_unit(&RANGE_WITH_UNIT_REGEX, line, strip_whitespace)
}

/// "3 1/2 tablespoons olive oil"
fn match_mixed_fraction_with_unit(line: &str) -> Option<ParsedIngredient> {
    match_quantity_with_unit(&MIXED_FRACTION_WITH_UNIT_REGEX, line, collapse_whitespace)
}

/// Optional quantity, optional unit, optional "of", then the name.
///
/// Returns `None` when nothing quantity-like prefixes the line, which leaves
/// the whole line as the name.
fn match_general(line: &str) -> Option<ParsedIngredient> {
    let captures = GENERAL_REGEX.captures(line)?;
    let prefix = captures.get(1)?;
    if prefix.as_str().trim().is_empty() {
        return None;
    }

    let name = clean_ingredient_name(&line[prefix.end()..]);

    if let Some(unit) = captures.name("unit") {
        let quantity = captures
            .name("qty")
            .map(|qty| format_general_quantity(qty.as_str()))
            .unwrap_or_default();
        return Some(ParsedIngredient::new(name, quantity, normalize_unit(unit.as_str())));
    }

    let fragment = strip_of_suffix(prefix.as_str());
    if fragment.contains(|c: char| c.is_ascii_digit()) || fragment.contains('-') {
        return Some(split_unitless_fragment(fragment, name));
    }

    Some(ParsedIngredient::name_only(title_case(line)))
}

/// Ranges lose inner whitespace, everything else gets single spacing
fn format_general_quantity(quantity: &str) -> String {
    if quantity.contains('-') {
        strip_whitespace(quantity)
    } else {
        collapse_whitespace(quantity)
    }
}

/// Work out the quantity of a prefix that carried no recognized unit
fn split_unitless_fragment(fragment: &str, name: String) -> ParsedIngredient {
    let parts: Vec<&str> = fragment.split_whitespace().collect();

    if parts.len() == 2 && parts[1].contains('/') {
        return ParsedIngredient::new(name, parts.join(" "), "");
    }

    if fragment.contains('-') {
        let range = fragment
            .split('-')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("-");
        return ParsedIngredient::new(name, range, "");
    }

    if parts.len() == 2 && parts[0].chars().all(|c| c.is_ascii_digit()) {
        return ParsedIngredient::new(name, parts[0], normalize_unit(parts[1]));
    }

    let lower = fragment.to_lowercase();
    if let Some(special) = SPECIAL_UNITS.iter().find(|word| lower.contains(*word)) {
        return ParsedIngredient::new(name, "", *special);
    }

    ParsedIngredient::new(name, fragment.trim(), "")
}
