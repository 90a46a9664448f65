use super::*;
use crate::morsel::store::RecipeDraft;
use crate::morsel::tokenizer::StopwordSet;

fn recipe(id: &str, ingredients: &str) -> Recipe {
    let mut draft = RecipeDraft {
        id: id.to_string(),
        ..RecipeDraft::default()
    };
    draft.ingredients = Some(ingredients.to_string());
    draft.normalize(&StopwordSet::default())
}

fn cocktail(id: &str, ingredients: &str) -> Recipe {
    let mut draft = RecipeDraft {
        id: id.to_string(),
        kind: Some(RecipeKind::Cocktail),
        ..RecipeDraft::default()
    };
    draft.ingredients = Some(ingredients.to_string());
    draft.normalize(&StopwordSet::default())
}

fn pantry(items: &[&str]) -> HaveSet {
    let mut have = HaveSet::new();
    for item in items {
        have.add(item);
    }
    have
}

// ============================================================================
// HaveSet Tests
// ============================================================================

#[test]
fn test_have_set_normalizes_and_dedups() {
    let mut have = HaveSet::new();
    assert!(have.add("  Chicken "));
    assert!(!have.add("chicken"));
    assert!(!have.add("   "));

    assert_eq!(have.len(), 1);
    assert!(have.contains("chicken"));
}

#[test]
fn test_have_set_preserves_insertion_order() {
    let have = pantry(&["garlic", "chicken", "onion"]);
    let items: Vec<&str> = have.iter().collect();
    assert_eq!(items, vec!["garlic", "chicken", "onion"]);
}

#[test]
fn test_have_set_remove_and_clear() {
    let mut have = pantry(&["garlic", "onion"]);
    assert!(have.remove("Garlic"));
    assert!(!have.remove("garlic"));
    assert_eq!(have.len(), 1);

    have.clear();
    assert!(have.is_empty());
}

#[test]
fn test_have_set_serializes_as_plain_array() {
    let have = pantry(&["garlic", "onion"]);
    let json = serde_json::to_string(&have).unwrap();
    assert_eq!(json, r#"["garlic","onion"]"#);

    let thawed: HaveSet = serde_json::from_str(&json).unwrap();
    assert_eq!(thawed, have);
}

// ============================================================================
// Scoring Tests
// ============================================================================

#[test]
fn test_rank_counts_matched_and_missing() {
    let r = recipe("r1", "chicken\nonion\ngarlic");
    let have = pantry(&["chicken", "garlic"]);

    let ranked = rank(&have, [&r], 50, &FinderFilters::default()).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].matched_count(), 2);
    assert_eq!(ranked[0].missing_count(), 1);
    assert!((ranked[0].missing_pct() - 100.0 / 3.0).abs() < 0.01);
}

#[test]
fn test_rank_tolerance_boundary() {
    // matched 2/3, missing 1/3 -> missingPct = 33.33
    let r = recipe("r1", "chicken\nonion\ngarlic");
    let have = pantry(&["chicken", "garlic"]);

    let at_30 = rank(&have, [&r], 30, &FinderFilters::default()).unwrap();
    assert!(at_30.is_empty(), "33.33% missing exceeds 30% tolerance");

    let at_34 = rank(&have, [&r], 34, &FinderFilters::default()).unwrap();
    assert_eq!(at_34.len(), 1);
}

#[test]
fn test_rank_empty_pantry_means_no_ranking() {
    let r = recipe("r1", "chicken");
    let have = HaveSet::new();

    assert!(rank(&have, [&r], 100, &FinderFilters::default()).is_none());
}

#[test]
fn test_rank_tokenless_recipe_never_matches() {
    // Ingredients that tokenize to nothing: digits and stopwords only.
    let r = recipe("r1", "1 tbsp\n2 tsp");
    assert!(r.tokens().is_empty());

    let have = pantry(&["chicken"]);
    let ranked = rank(&have, [&r], 100, &FinderFilters::default()).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_rank_perfect_match() {
    let r = recipe("r1", "chicken\ngarlic");
    let have = pantry(&["chicken", "garlic", "butter"]);

    let ranked = rank(&have, [&r], 0, &FinderFilters::default()).unwrap();
    assert_eq!(ranked.len(), 1);
    assert!(ranked[0].is_perfect());
    assert_eq!(ranked[0].missing_pct(), 0.0);
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[test]
fn test_rank_orders_by_matched_desc_then_missing_asc() {
    let two_matched_none_missing = recipe("a", "chicken\ngarlic");
    let two_matched_one_missing = recipe("b", "chicken\ngarlic\nleeks");
    let one_matched = recipe("c", "chicken");
    let have = pantry(&["chicken", "garlic"]);

    let ranked = rank(
        &have,
        [&one_matched, &two_matched_one_missing, &two_matched_none_missing],
        50,
        &FinderFilters::default(),
    )
    .unwrap();

    let ids: Vec<&str> = ranked.iter().map(|m| m.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_rank_ties_keep_candidate_order() {
    let first = recipe("first", "chicken\nonion");
    let second = recipe("second", "chicken\nleeks");
    let have = pantry(&["chicken"]);

    let ranked = rank(&have, [&first, &second], 50, &FinderFilters::default()).unwrap();
    let ids: Vec<&str> = ranked.iter().map(|m| m.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);

    // Same scores, reversed input: order follows the candidates.
    let ranked = rank(&have, [&second, &first], 50, &FinderFilters::default()).unwrap();
    let ids: Vec<&str> = ranked.iter().map(|m| m.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["second", "first"]);
}

#[test]
fn test_rank_caps_results() {
    let recipes: Vec<Recipe> = (0..RESULT_CAP + 20)
        .map(|i| recipe(&format!("r{i}"), "chicken"))
        .collect();
    let have = pantry(&["chicken"]);

    let ranked = rank(&have, recipes.iter(), 0, &FinderFilters::default()).unwrap();
    assert_eq!(ranked.len(), RESULT_CAP);
}

// ============================================================================
// Filter Tests
// ============================================================================

#[test]
fn test_rank_kind_filter() {
    let food = recipe("f", "chicken");
    let drink = cocktail("c", "vodka\nchicken");
    let have = pantry(&["chicken", "vodka"]);

    let only_cocktails = FinderFilters {
        kind: Some(RecipeKind::Cocktail),
        ..FinderFilters::default()
    };
    let ranked = rank(&have, [&food, &drink], 100, &only_cocktails).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].recipe.id, "c");
}

#[test]
fn test_rank_allergen_filter() {
    let food = recipe("f", "chicken");
    let drink = cocktail("c", "vodka");
    let have = pantry(&["chicken", "vodka"]);

    let alcoholic = FinderFilters {
        allergen: Some("alcohol".to_string()),
        ..FinderFilters::default()
    };
    let ranked = rank(&have, [&food, &drink], 100, &alcoholic).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].recipe.id, "c");
}

#[test]
fn test_rank_does_not_mutate_inputs() {
    let r = recipe("r1", "chicken\nonion");
    let have = pantry(&["chicken"]);
    let before = have.clone();

    let _ = rank(&have, [&r], 100, &FinderFilters::default());
    assert_eq!(have, before);
    assert_eq!(r.tokens().len(), 2);
}
