use super::*;

fn stops() -> StopwordSet {
    StopwordSet::default()
}

#[test]
fn test_catalogue_counts_and_order() {
    let catalogue = build_catalogue(10, 4, &stops());
    assert_eq!(catalogue.len(), 14);

    assert!(catalogue[..10].iter().all(|r| r.kind == RecipeKind::Food));
    assert!(catalogue[10..].iter().all(|r| r.kind == RecipeKind::Cocktail));
}

#[test]
fn test_seeding_is_deterministic() {
    let a = build_catalogue(50, 10, &stops());
    let b = build_catalogue(50, 10, &stops());

    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.name, y.name);
        assert_eq!(x.ingredients, y.ingredients);
        assert_eq!(x.moods, y.moods);
        assert_eq!(x.allergens, y.allergens);
    }
}

#[test]
fn test_ids_are_unique() {
    let catalogue = build_catalogue(100, 30, &stops());
    let mut ids: Vec<&str> = catalogue.iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 130);
}

#[test]
fn test_every_seed_recipe_is_well_formed() {
    for recipe in build_catalogue(200, 50, &stops()) {
        assert!(!recipe.name.is_empty());
        assert!((1..=5).contains(&recipe.level));
        assert!(recipe.moods.len() <= 3);
        assert!(!recipe.moods.is_empty());
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.method.is_empty());
        assert_eq!(recipe.source, RecipeSource::Seed);
        assert!(
            !recipe.tokens().is_empty(),
            "seeded ingredients must tokenize: {}",
            recipe.id
        );
    }
}

#[test]
fn test_cocktails_carry_alcohol_tag_once() {
    let catalogue = build_catalogue(0, 30, &stops());
    for recipe in catalogue {
        assert_eq!(
            recipe.allergens.iter().filter(|a| *a == "Alcohol").count(),
            1,
            "{}",
            recipe.id
        );
    }
}

#[test]
fn test_food_levels_cycle_one_through_five() {
    let catalogue = build_catalogue(10, 0, &stops());
    let levels: Vec<u8> = catalogue.iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5]);
}

#[test]
fn test_allergens_are_sparse() {
    let catalogue = build_catalogue(500, 0, &stops());
    let tagged = catalogue.iter().filter(|r| !r.allergens.is_empty()).count();

    // chance 0.18 over modular arithmetic: some but far from all
    assert!(tagged > 0);
    assert!(tagged < 250);
}

#[test]
fn test_seed_ingredients_tokenize_to_matchable_sets() {
    let catalogue = build_catalogue(1, 0, &stops());
    let tokens = catalogue[0].tokens();

    // "300 g chicken" + base pantry lines
    assert!(tokens.contains("chicken"));
    assert!(tokens.contains("onion"));
    assert!(tokens.contains("garlic"));
    assert!(!tokens.contains("tbsp"));
}
