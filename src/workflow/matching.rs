/// A recipe ingredient counts as supplied when any supplied entry is a
/// literal, case-sensitive substring of it.
pub fn is_supplied(recipe_ingredient: &str, supplied: &[String]) -> bool {
    supplied
        .iter()
        .any(|ingredient| recipe_ingredient.contains(ingredient.as_str()))
}

/// Recipe ingredients not covered by `supplied`, in recipe order
pub fn missing_ingredients<'a>(
    recipe_ingredients: &'a [String],
    supplied: &[String],
) -> Vec<&'a str> {
    recipe_ingredients
        .iter()
        .filter(|ingredient| !is_supplied(ingredient, supplied))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_match() {
        assert!(is_supplied("1/2 stick of butter", &strings(&["butter"])));
        assert!(!is_supplied("1/2 cup of milk", &strings(&["butter", "cream"])));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!is_supplied("2 cups Flour", &strings(&["flour"])));
    }

    #[test]
    fn test_nothing_supplied() {
        assert!(!is_supplied("salt", &[]));
    }

    #[test]
    fn test_missing_keeps_recipe_order() {
        let recipe = strings(&["2 cups sugar", "1/2 stick of butter", "1 cup milk", "3 eggs"]);
        let supplied = strings(&["butter", "egg"]);
        assert_eq!(
            missing_ingredients(&recipe, &supplied),
            vec!["2 cups sugar", "1 cup milk"]
        );
    }
}
