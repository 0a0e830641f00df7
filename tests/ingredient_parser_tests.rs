#[cfg(test)]
mod tests {
    use grocery_list::ingredient_parser::{parse_ingredient, parse_ingredient_list};
    use grocery_list::ParsedIngredient;

    fn parsed(name: &str, quantity: &str, unit: &str) -> ParsedIngredient {
        ParsedIngredient::new(name, quantity, unit)
    }

    #[test]
    fn test_section_header() {
        assert_eq!(parse_ingredient("Sauce:"), ParsedIngredient::header());
        assert_eq!(parse_ingredient("For the topping:"), ParsedIngredient::header());
    }

    #[test]
    fn test_long_line_ending_with_colon_is_not_a_header() {
        let result = parse_ingredient("Ingredients for the marinade:");
        assert!(result.name.is_empty());

        assert_eq!(
            parse_ingredient("Ingredients for the marinade: 2 cups yogurt"),
            parsed("Yogurt", "2", "cups")
        );
    }

    #[test]
    fn test_unicode_fraction_with_unit() {
        assert_eq!(parse_ingredient("½ cup flour"), parsed("Flour", "1/2", "cup"));
        assert_eq!(parse_ingredient("¼ teaspoon nutmeg"), parsed("Nutmeg", "1/4", "teaspoon"));
    }

    #[test]
    fn test_unicode_fraction_after_whole_number() {
        assert_eq!(parse_ingredient("1½ cups milk"), parsed("Milk", "1 1/2", "cups"));
        assert_eq!(parse_ingredient("1 ½ cups milk"), parsed("Milk", "1 1/2", "cups"));
    }

    #[test]
    fn test_mixed_fraction_keeps_plural() {
        assert_eq!(
            parse_ingredient("3 1/2 tablespoons olive oil"),
            parsed("Olive Oil", "3 1/2", "tablespoons")
        );
    }

    #[test]
    fn test_range_with_unit() {
        assert_eq!(parse_ingredient("1-5 grams sugar"), parsed("Sugar", "1-5", "grams"));
        assert_eq!(parse_ingredient("1 - 2 cups broth"), parsed("Broth", "1-2", "cups"));
    }

    #[test]
    fn test_unit_glued_to_number() {
        assert_eq!(
            parse_ingredient("500grams chicken breast"),
            parsed("Chicken Breast", "500", "grams")
        );
        assert_eq!(parse_ingredient("500ml water"), parsed("Water", "500", "milliliter"));
    }

    #[test]
    fn test_special_word_without_quantity() {
        assert_eq!(parse_ingredient("Pinch of salt"), parsed("Salt", "", "pinch"));
        assert_eq!(parse_ingredient("Handful of spinach"), parsed("Spinach", "", "handful"));
        assert_eq!(parse_ingredient("dash hot sauce"), parsed("Hot Sauce", "", "dash"));
    }

    #[test]
    fn test_name_only() {
        assert_eq!(
            parse_ingredient("Fresh basil leaves"),
            parsed("Fresh Basil Leaves", "", "")
        );
        assert_eq!(parse_ingredient("Salt to taste"), parsed("Salt To Taste", "", ""));
    }

    #[test]
    fn test_abbreviations_are_normalized() {
        assert_eq!(parse_ingredient("1 tbsp sugar"), parsed("Sugar", "1", "tablespoon"));
        assert_eq!(parse_ingredient("2 Tbsps butter"), parsed("Butter", "2", "tablespoon"));
        assert_eq!(parse_ingredient("1 lb. ground beef"), parsed("Ground Beef", "1", "pound"));
        assert_eq!(parse_ingredient("1 t. salt"), parsed("Salt", "1", "teaspoon"));
        assert_eq!(parse_ingredient("1 T salt"), parsed("Salt", "1", "tablespoon"));
        assert_eq!(parse_ingredient("2.5 kg potatoes"), parsed("Potatoes", "2.5", "kilogram"));
    }

    #[test]
    fn test_of_after_unit_is_dropped() {
        assert_eq!(parse_ingredient("2 cups of flour"), parsed("Flour", "2", "cups"));
        assert_eq!(
            parse_ingredient("3 1/2 tablespoons of olive oil"),
            parsed("Olive Oil", "3 1/2", "tablespoons")
        );
    }

    #[test]
    fn test_single_letter_units_need_a_word_boundary() {
        assert_eq!(parse_ingredient("2 garlic cloves"), parsed("Garlic Cloves", "2", ""));
        assert_eq!(parse_ingredient("3 cloves garlic, minced"), parsed("Garlic, Minced", "3", "cloves"));
        assert_eq!(parse_ingredient("2 tomatoes"), parsed("Tomatoes", "2", ""));
    }

    #[test]
    fn test_header_prefix_and_asides_are_removed() {
        assert_eq!(
            parse_ingredient("Topping: 1 cup heavy cream (cold)"),
            parsed("Heavy Cream", "1", "cup")
        );
        assert_eq!(
            parse_ingredient("2 (14 ounce) cans diced tomatoes"),
            parsed("Cans Diced Tomatoes", "2", "")
        );
    }

    #[test]
    fn test_quantity_without_name() {
        assert_eq!(parse_ingredient("1/2 tsp"), parsed("", "1/2", "teaspoon"));
        assert_eq!(parse_ingredient("12345"), parsed("", "12345", ""));
    }

    #[test]
    fn test_parse_is_total() {
        let inputs = [
            "", "   ", ":", "::", "(((", ")", "½", "é½", "-", "- -", "1-", "/", "1/", "of",
            "Of of of", "!!!", "2 cups", "\t\n", "1/0 cup", "99999999999999999999 g rice",
        ];
        for input in inputs {
            let result = parse_ingredient(input);
            assert_eq!(result, parse_ingredient(input), "not deterministic for {input:?}");
        }
        assert_eq!(parse_ingredient(""), ParsedIngredient::header());
        assert_eq!(parse_ingredient("   "), ParsedIngredient::header());
        assert_eq!(parse_ingredient("!!!"), parsed("!!!", "", ""));
    }

    #[test]
    fn test_parse_ingredient_list() {
        let text = "Cake:\n2 cups flour\n1 cup sugar\n\nFrosting:\n½ cup butter\n";
        let parsed = parse_ingredient_list(text);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].name, "Flour");
        assert_eq!(parsed[1].unit, "cup");
        assert_eq!(parsed[2].quantity, "1/2");
    }
}
