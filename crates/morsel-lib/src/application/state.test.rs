use super::*;
use crate::storage::MemoryStorage;

fn small_seeded_storage() -> MemoryStorage {
    let storage = MemoryStorage::new();
    let stops = StopwordSet::default();
    let catalogue = build_catalogue(50, 10, &stops);
    save(&storage, StoreKey::Recipes, &catalogue).unwrap();
    storage
}

#[test]
fn test_load_seeds_empty_storage() {
    let storage = MemoryStorage::new();
    let state = AppState::load(&storage).unwrap();

    assert_eq!(
        state.store.catalogue().len(),
        DEFAULT_FOOD_COUNT + DEFAULT_COCKTAIL_COUNT
    );
    // The seeded catalogue was persisted for the next run.
    assert!(storage.read(StoreKey::Recipes).unwrap().is_some());
}

#[test]
fn test_load_respects_existing_catalogue_at_floor() {
    let storage = small_seeded_storage();
    let state = AppState::load(&storage).unwrap();
    assert_eq!(state.store.catalogue().len(), 60);
}

#[test]
fn test_load_reseeds_below_floor() {
    let storage = MemoryStorage::new();
    let stops = StopwordSet::default();
    let tiny = build_catalogue(5, 0, &stops);
    save(&storage, StoreKey::Recipes, &tiny).unwrap();

    let state = AppState::load(&storage).unwrap();
    assert_eq!(
        state.store.catalogue().len(),
        DEFAULT_FOOD_COUNT + DEFAULT_COCKTAIL_COUNT
    );
}

#[test]
fn test_loaded_recipes_have_token_sets() {
    let storage = small_seeded_storage();
    let state = AppState::load(&storage).unwrap();

    // Tokens are serde-skipped; load must rebuild them.
    let recipe = state.store.get("seed_food_0").unwrap();
    assert!(recipe.tokens().contains("chicken"));
}

#[test]
fn test_malformed_keys_fall_back_to_defaults() {
    let storage = small_seeded_storage();
    storage.preload(StoreKey::Favs, "][ not json");
    storage.preload(StoreKey::Units, "42");
    storage.preload(StoreKey::Shop, "{\"wrong\": \"shape\"}");

    let state = AppState::load(&storage).unwrap();
    assert!(state.favs.is_empty());
    assert_eq!(state.units, Units::Metric);
    assert!(state.shop.is_empty());
}

#[test]
fn test_add_user_recipe_validates_then_prepends() {
    let storage = small_seeded_storage();
    let mut state = AppState::load(&storage).unwrap();

    let empty = RecipeDraft::default();
    assert_eq!(state.add_user_recipe(empty), Err(DraftError::MissingName));

    let draft = RecipeDraft {
        name: Some("Midnight Toast".to_string()),
        ingredients: Some("2 slices bread\n1 tbsp butter".to_string()),
        method: Some("Toast. Butter.".to_string()),
        ..RecipeDraft::default()
    };
    let id = state.add_user_recipe(draft).unwrap();

    let recipe = state.store.get(&id).unwrap();
    assert_eq!(recipe.source, RecipeSource::User);
    assert_eq!(state.store.mine()[0].id, id);
    assert!(recipe.tokens().contains("bread"));
}

#[test]
fn test_add_user_recipe_bumps_colliding_ids() {
    let storage = small_seeded_storage();
    let mut state = AppState::load(&storage).unwrap();

    let draft = |id: &str| RecipeDraft {
        id: id.to_string(),
        name: Some("Toast".to_string()),
        ingredients: Some("bread".to_string()),
        method: Some("toast".to_string()),
        ..RecipeDraft::default()
    };

    let first = state.add_user_recipe(draft("my_fixed")).unwrap();
    let second = state.add_user_recipe(draft("my_fixed")).unwrap();

    assert_eq!(first, "my_fixed");
    assert_eq!(second, "my_fixed_1");
}

#[test]
fn test_reseed_preserves_user_recipes_and_other_keys() {
    let storage = small_seeded_storage();
    let mut state = AppState::load(&storage).unwrap();

    let id = state
        .add_user_recipe(RecipeDraft {
            name: Some("Toast".to_string()),
            ingredients: Some("bread".to_string()),
            method: Some("toast".to_string()),
            ..RecipeDraft::default()
        })
        .unwrap();
    state.save_my_recipes(&storage).unwrap();
    state.favs.insert(id.clone());
    state.save_favs(&storage).unwrap();
    state.pantry.add("bread");
    state.save_pantry(&storage).unwrap();

    state.reseed(80, 20);
    state.save_catalogue(&storage).unwrap();

    let reloaded = AppState::load(&storage).unwrap();
    assert_eq!(reloaded.store.catalogue().len(), 100);
    assert!(reloaded.store.get(&id).is_some());
    assert!(reloaded.favs.contains(&id));
    assert!(reloaded.pantry.contains("bread"));
}

#[test]
fn test_toggle_fav() {
    let storage = small_seeded_storage();
    let mut state = AppState::load(&storage).unwrap();

    assert!(state.toggle_fav("seed_food_1"));
    assert!(state.favs.contains("seed_food_1"));
    assert!(!state.toggle_fav("seed_food_1"));
    assert!(state.favs.is_empty());
}

#[test]
fn test_average_rating_distinguishes_unrated() {
    let storage = small_seeded_storage();
    let mut state = AppState::load(&storage).unwrap();

    assert_eq!(state.average_rating("seed_food_1"), None);
    assert_eq!(state.ratings_count("seed_food_1"), 0);

    state
        .ratings
        .entry("seed_food_1".to_string())
        .or_default()
        .record(3)
        .unwrap();
    state
        .ratings
        .entry("seed_food_1".to_string())
        .or_default()
        .record(5)
        .unwrap();

    assert_eq!(state.average_rating("seed_food_1"), Some(4.0));
    assert_eq!(state.ratings_count("seed_food_1"), 2);
}

#[test]
fn test_cocktails_locked_until_yes() {
    let storage = small_seeded_storage();
    let mut state = AppState::load(&storage).unwrap();

    assert!(!state.cocktails_unlocked());
    state.age = Some(AgeAnswer::No);
    assert!(!state.cocktails_unlocked());
    state.age = Some(AgeAnswer::Yes);
    assert!(state.cocktails_unlocked());
}

#[test]
fn test_age_answer_round_trips_through_storage() {
    let storage = small_seeded_storage();
    let mut state = AppState::load(&storage).unwrap();
    state.age = Some(AgeAnswer::Yes);
    state.save_age(&storage).unwrap();

    let reloaded = AppState::load(&storage).unwrap();
    assert!(reloaded.cocktails_unlocked());
}
