use super::*;
use crate::morsel::store::RecipeDraft;
use crate::morsel::tokenizer::StopwordSet;

fn recipe(id: &str, name: &str, kind: RecipeKind, moods: &[&str], allergens: &[&str]) -> Recipe {
    let draft = RecipeDraft {
        id: id.to_string(),
        kind: Some(kind),
        name: Some(name.to_string()),
        moods: Some(moods.iter().map(|s| s.to_string()).collect()),
        allergens: Some(allergens.iter().map(|s| s.to_string()).collect()),
        ingredients: Some("300 g chicken\n1 onion".to_string()),
        ..RecipeDraft::default()
    };
    draft.normalize(&StopwordSet::default())
}

#[test]
fn test_no_filters_admit_everything() {
    let a = recipe("a", "Stew", RecipeKind::Food, &[], &[]);
    let b = recipe("b", "Fizz", RecipeKind::Cocktail, &[], &[]);

    let found = browse([&a, &b], &BrowseFilters::default());
    assert_eq!(found.len(), 2);
}

#[test]
fn test_kind_filter() {
    let a = recipe("a", "Stew", RecipeKind::Food, &[], &[]);
    let b = recipe("b", "Fizz", RecipeKind::Cocktail, &[], &[]);

    let filters = BrowseFilters {
        kind: Some(RecipeKind::Cocktail),
        ..BrowseFilters::default()
    };
    let found = browse([&a, &b], &filters);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "b");
}

#[test]
fn test_mood_filter_is_case_insensitive() {
    let a = recipe("a", "Stew", RecipeKind::Food, &["Comfort", "Quick"], &[]);
    let b = recipe("b", "Salad", RecipeKind::Food, &["Healthy"], &[]);

    let filters = BrowseFilters {
        mood: Some("comfort".to_string()),
        ..BrowseFilters::default()
    };
    let found = browse([&a, &b], &filters);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "a");
}

#[test]
fn test_allergen_filter() {
    let a = recipe("a", "Stew", RecipeKind::Food, &[], &["Gluten"]);
    let b = recipe("b", "Salad", RecipeKind::Food, &[], &[]);

    let filters = BrowseFilters {
        allergen: Some("gluten".to_string()),
        ..BrowseFilters::default()
    };
    let found = browse([&a, &b], &filters);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "a");
}

#[test]
fn test_query_searches_name_and_ingredients() {
    let a = recipe("a", "Rustic Stew", RecipeKind::Food, &[], &[]);
    let b = recipe("b", "Salad", RecipeKind::Food, &[], &[]);

    let by_name = BrowseFilters {
        query: Some("rustic".to_string()),
        ..BrowseFilters::default()
    };
    assert_eq!(browse([&a, &b], &by_name).len(), 1);

    // Both share the chicken ingredient line.
    let by_ingredient = BrowseFilters {
        query: Some("CHICKEN".to_string()),
        ..BrowseFilters::default()
    };
    assert_eq!(browse([&a, &b], &by_ingredient).len(), 2);
}

#[test]
fn test_blank_query_admits_everything() {
    let a = recipe("a", "Stew", RecipeKind::Food, &[], &[]);
    let filters = BrowseFilters {
        query: Some("   ".to_string()),
        ..BrowseFilters::default()
    };
    assert_eq!(browse([&a], &filters).len(), 1);
}

#[test]
fn test_query_matches_kind_label() {
    let a = recipe("a", "Fizz", RecipeKind::Cocktail, &[], &[]);
    let filters = BrowseFilters {
        query: Some("cocktail".to_string()),
        ..BrowseFilters::default()
    };
    assert_eq!(browse([&a], &filters).len(), 1);
}

#[test]
fn test_filters_combine() {
    let a = recipe("a", "Spicy Stew", RecipeKind::Food, &["Spicy"], &["Gluten"]);
    let b = recipe("b", "Spicy Fizz", RecipeKind::Cocktail, &["Spicy"], &[]);

    let filters = BrowseFilters {
        query: Some("spicy".to_string()),
        kind: Some(RecipeKind::Food),
        mood: Some("Spicy".to_string()),
        allergen: Some("Gluten".to_string()),
    };
    let found = browse([&a, &b], &filters);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "a");
}

#[test]
fn test_browse_preserves_input_order() {
    let a = recipe("a", "Stew One", RecipeKind::Food, &[], &[]);
    let b = recipe("b", "Stew Two", RecipeKind::Food, &[], &[]);
    let c = recipe("c", "Stew Three", RecipeKind::Food, &[], &[]);

    let filters = BrowseFilters {
        query: Some("stew".to_string()),
        ..BrowseFilters::default()
    };
    let ids: Vec<&str> = browse([&b, &c, &a], &filters)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}
