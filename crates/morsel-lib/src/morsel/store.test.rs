use super::*;

fn stops() -> StopwordSet {
    StopwordSet::default()
}

fn draft(id: &str) -> RecipeDraft {
    RecipeDraft {
        id: id.to_string(),
        ..RecipeDraft::default()
    }
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_normalize_applies_defaults() {
    let recipe = draft("r1").normalize(&stops());

    assert_eq!(recipe.name, "Untitled");
    assert_eq!(recipe.kind, RecipeKind::Food);
    assert_eq!(recipe.level, 2);
    assert_eq!(recipe.serves, "2");
    assert_eq!(recipe.time, "20m");
    assert!(recipe.moods.is_empty());
    assert!(recipe.allergens.is_empty());
    assert!(recipe.tokens().is_empty());
}

#[test]
fn test_normalize_clamps_level() {
    let mut d = draft("r1");
    d.level = Some(9);
    assert_eq!(d.normalize(&stops()).level, 5);

    let mut d = draft("r2");
    d.level = Some(0);
    assert_eq!(d.normalize(&stops()).level, 1);
}

#[test]
fn test_normalize_cocktail_defaults() {
    let mut d = draft("c1");
    d.kind = Some(RecipeKind::Cocktail);
    let recipe = d.normalize(&stops());

    assert_eq!(recipe.serves, "1");
    assert_eq!(recipe.allergens, vec![ALCOHOL_TAG.to_string()]);
}

#[test]
fn test_normalize_cocktail_alcohol_tag_appears_exactly_once() {
    let mut d = draft("c1");
    d.kind = Some(RecipeKind::Cocktail);
    d.allergens = Some(vec![
        "Alcohol".to_string(),
        "Gluten".to_string(),
        "Alcohol".to_string(),
    ]);
    let recipe = d.normalize(&stops());

    assert_eq!(
        recipe.allergens.iter().filter(|a| *a == ALCOHOL_TAG).count(),
        1
    );
    assert!(recipe.allergens.contains(&"Gluten".to_string()));
}

#[test]
fn test_normalize_caps_and_dedups_moods() {
    let mut d = draft("r1");
    d.moods = Some(vec![
        " Comfort ".to_string(),
        "Quick".to_string(),
        "Comfort".to_string(),
        "Spicy".to_string(),
        "Healthy".to_string(),
    ]);
    let recipe = d.normalize(&stops());

    assert_eq!(recipe.moods, vec!["Comfort", "Quick", "Spicy"]);
}

#[test]
fn test_normalize_computes_token_set() {
    let mut d = draft("r1");
    d.ingredients = Some("300 g chicken\n1 onion, chopped".to_string());
    let recipe = d.normalize(&stops());

    assert!(recipe.tokens().contains("chicken"));
    assert!(recipe.tokens().contains("onion"));
    assert!(!recipe.tokens().contains("chopped"));
}

#[test]
fn test_set_ingredients_recomputes_tokens() {
    let mut d = draft("r1");
    d.ingredients = Some("300 g chicken".to_string());
    let mut recipe = d.normalize(&stops());
    assert!(recipe.tokens().contains("chicken"));

    recipe.set_ingredients("2 leeks", &stops());
    assert!(recipe.tokens().contains("leeks"));
    assert!(!recipe.tokens().contains("chicken"));
}

#[test]
fn test_guess_time_scales_with_level() {
    assert_eq!(guess_time(1), "10m");
    assert_eq!(guess_time(3), "35m");
    assert_eq!(guess_time(5), "90m");
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_user_draft_requires_name_ingredients_method() {
    let mut d = draft("my_1");
    assert_eq!(d.validate_user_required(), Err(DraftError::MissingName));

    d.name = Some("Midnight Toast".to_string());
    assert_eq!(
        d.validate_user_required(),
        Err(DraftError::MissingIngredients)
    );

    d.ingredients = Some("2 slices bread".to_string());
    assert_eq!(d.validate_user_required(), Err(DraftError::MissingMethod));

    d.method = Some("Toast the bread.".to_string());
    assert_eq!(d.validate_user_required(), Ok(()));
}

#[test]
fn test_whitespace_only_fields_fail_validation() {
    let mut d = draft("my_1");
    d.name = Some("   ".to_string());
    d.ingredients = Some("bread".to_string());
    d.method = Some("toast".to_string());
    assert_eq!(d.validate_user_required(), Err(DraftError::MissingName));
}

// ============================================================================
// Tag Helper Tests
// ============================================================================

#[test]
fn test_clean_tag_collapses_whitespace() {
    assert_eq!(clean_tag("  Date   night "), "Date night");
    assert_eq!(clean_tag(",Comfort,"), "Comfort");
    assert_eq!(clean_tag("   "), "");
}

#[test]
fn test_parse_comma_tags_caps_and_dedups() {
    let tags = parse_comma_tags("Comfort, Quick,, Comfort , Spicy, BBQ", 3);
    assert_eq!(tags, vec!["Comfort", "Quick", "Spicy"]);
}

// ============================================================================
// Store Tests
// ============================================================================

fn named(id: &str, name: &str) -> Recipe {
    let mut d = draft(id);
    d.name = Some(name.to_string());
    d.normalize(&stops())
}

#[test]
fn test_all_yields_mine_before_catalogue() {
    let mut store = RecipeStore::new(
        vec![named("seed_1", "Seeded Stew")],
        vec![named("my_1", "My Pie")],
        &stops(),
    );
    store.add_mine(named("my_2", "Newer Pie"));

    let ids: Vec<&str> = store.all().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["my_2", "my_1", "seed_1"]);
}

#[test]
fn test_reseed_replaces_catalogue_only() {
    let mut store = RecipeStore::new(
        vec![named("seed_1", "Old Stew")],
        vec![named("my_1", "My Pie")],
        &stops(),
    );

    store.reseed(vec![named("seed_2", "New Stew"), named("seed_3", "New Soup")]);

    assert_eq!(store.mine().len(), 1);
    assert_eq!(store.catalogue().len(), 2);
    assert!(store.get("my_1").is_some());
    assert!(store.get("seed_1").is_none());
}

#[test]
fn test_new_rehydrates_token_sets() {
    let mut d = draft("seed_1");
    d.ingredients = Some("300 g chicken".to_string());
    let recipe = d.normalize(&stops());

    // Simulate a persistence round-trip: tokens are serde-skipped.
    let json = serde_json::to_string(&recipe).unwrap();
    let thawed: Recipe = serde_json::from_str(&json).unwrap();
    assert!(thawed.tokens().is_empty());

    let store = RecipeStore::new(vec![thawed], Vec::new(), &stops());
    assert!(store.get("seed_1").unwrap().tokens().contains("chicken"));
}

#[test]
fn test_get_finds_across_both_collections() {
    let store = RecipeStore::new(
        vec![named("seed_1", "Stew")],
        vec![named("my_1", "Pie")],
        &stops(),
    );

    assert_eq!(store.get("seed_1").unwrap().name, "Stew");
    assert_eq!(store.get("my_1").unwrap().name, "Pie");
    assert!(store.get("ghost").is_none());
    assert_eq!(store.len(), 2);
}
