use super::*;
use crate::application::session::{MockPrompt, MockSession};
use crate::morsel::seed::build_catalogue;
use crate::morsel::tokenizer::StopwordSet;
use crate::storage::{StoreKey, save};

/// Session whose storage already holds a small catalogue, skipping the
/// full-size first-run seed.
fn seeded_session() -> MockSession {
    let session = MockSession::new();
    let catalogue = build_catalogue(50, 10, &StopwordSet::default());
    save(session.storage(), StoreKey::Recipes, &catalogue).unwrap();
    session
}

fn run(session: &MockSession, command: Commands) {
    execute_command_with_session(command, session).unwrap();
}

#[test]
fn test_seed_command_rebuilds_catalogue() {
    let session = seeded_session();
    run(
        &session,
        Commands::Seed {
            food: Some(30),
            cocktails: Some(5),
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.store.catalogue().len(), 35);
}

#[test]
fn test_pantry_add_persists_normalized() {
    let session = seeded_session();
    run(
        &session,
        Commands::Pantry {
            action: PantryAction::Add {
                items: vec!["  Chicken ".to_string(), "garlic".to_string()],
            },
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.pantry.len(), 2);
    assert!(state.pantry.contains("chicken"));
    assert!(state.pantry.contains("garlic"));
}

#[test]
fn test_pantry_remove_and_clear() {
    let session = seeded_session();
    run(
        &session,
        Commands::Pantry {
            action: PantryAction::Add {
                items: vec!["chicken".to_string(), "garlic".to_string()],
            },
        },
    );
    run(
        &session,
        Commands::Pantry {
            action: PantryAction::Remove {
                items: vec!["chicken".to_string()],
            },
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.pantry.len(), 1);

    run(
        &session,
        Commands::Pantry {
            action: PantryAction::Clear,
        },
    );
    let state = AppState::load(session.storage()).unwrap();
    assert!(state.pantry.is_empty());
}

#[test]
fn test_find_runs_with_and_without_pantry() {
    let session = seeded_session();

    // Empty pantry: the no-ranking path.
    run(
        &session,
        Commands::Find {
            tolerance: 50,
            kind: KindArg::All,
            allergen: None,
        },
    );

    run(
        &session,
        Commands::Pantry {
            action: PantryAction::Add {
                items: ["chicken", "onion", "garlic", "stock", "paprika"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
        },
    );
    run(
        &session,
        Commands::Find {
            tolerance: 80,
            kind: KindArg::Food,
            allergen: None,
        },
    );
}

#[test]
fn test_add_recipe_persists_and_appears_in_book() {
    let session = seeded_session();
    run(
        &session,
        Commands::Add {
            name: Some("Midnight Toast".to_string()),
            kind: KindArg::Food,
            level: Some(1),
            moods: Some("Quick, Comfort".to_string()),
            allergens: Some("Gluten".to_string()),
            serves: None,
            time: None,
            history: None,
            ingredients: vec!["2 slices bread".to_string(), "1 tbsp butter".to_string()],
            method: Some("Toast. Butter. Eat.".to_string()),
            variations: None,
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.store.mine().len(), 1);
    let recipe = &state.store.mine()[0];
    assert_eq!(recipe.name, "Midnight Toast");
    assert_eq!(recipe.moods, vec!["Quick", "Comfort"]);
    assert_eq!(recipe.allergens, vec!["Gluten"]);
    assert!(recipe.tokens().contains("bread"));

    run(&session, Commands::Book);
}

#[test]
fn test_add_without_required_fields_saves_nothing() {
    let session = seeded_session();
    run(
        &session,
        Commands::Add {
            name: None,
            kind: KindArg::Food,
            level: None,
            moods: None,
            allergens: None,
            serves: None,
            time: None,
            history: None,
            ingredients: Vec::new(),
            method: None,
            variations: None,
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert!(state.store.mine().is_empty());
}

#[test]
fn test_interactive_add_prompts_for_required_fields() {
    let session = MockSession::with_prompt(MockPrompt::interactive());
    let catalogue = build_catalogue(50, 10, &StopwordSet::default());
    save(session.storage(), StoreKey::Recipes, &catalogue).unwrap();

    session.prompt_mock().queue_text("Midnight Toast"); // name
    session.prompt_mock().queue_text("2 slices bread"); // ingredient 1
    session.prompt_mock().queue_text(""); // end of ingredients
    session.prompt_mock().queue_text("Toast it."); // method

    run(
        &session,
        Commands::Add {
            name: None,
            kind: KindArg::Food,
            level: None,
            moods: None,
            allergens: None,
            serves: None,
            time: None,
            history: None,
            ingredients: Vec::new(),
            method: None,
            variations: None,
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.store.mine().len(), 1);
    assert_eq!(state.store.mine()[0].name, "Midnight Toast");
}

#[test]
fn test_fav_toggles_and_persists() {
    let session = seeded_session();
    run(
        &session,
        Commands::Fav {
            id: "seed_food_1".to_string(),
        },
    );
    let state = AppState::load(session.storage()).unwrap();
    assert!(state.favs.contains("seed_food_1"));

    run(
        &session,
        Commands::Fav {
            id: "seed_food_1".to_string(),
        },
    );
    let state = AppState::load(session.storage()).unwrap();
    assert!(state.favs.is_empty());
}

#[test]
fn test_fav_unknown_recipe_changes_nothing() {
    let session = seeded_session();
    run(
        &session,
        Commands::Fav {
            id: "ghost".to_string(),
        },
    );
    let state = AppState::load(session.storage()).unwrap();
    assert!(state.favs.is_empty());
}

#[test]
fn test_rate_and_comment_persist() {
    let session = seeded_session();
    run(
        &session,
        Commands::Rate {
            id: "seed_food_1".to_string(),
            stars: 5,
        },
    );
    run(
        &session,
        Commands::Rate {
            id: "seed_food_1".to_string(),
            stars: 3,
        },
    );
    run(
        &session,
        Commands::Comment {
            id: "seed_food_1".to_string(),
            text: vec!["lovely".to_string(), "stuff".to_string()],
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.average_rating("seed_food_1"), Some(4.0));
    assert_eq!(
        state
            .comments
            .get("seed_food_1")
            .unwrap()
            .iter()
            .next()
            .unwrap()
            .text,
        "lovely stuff"
    );
}

#[test]
fn test_shop_workflow() {
    let session = seeded_session();
    run(
        &session,
        Commands::Shop {
            action: ShopAction::Add {
                text: vec!["oat".to_string(), "milk".to_string()],
            },
        },
    );
    run(
        &session,
        Commands::Shop {
            action: ShopAction::Add {
                text: vec!["bread".to_string()],
            },
        },
    );

    // Newest first.
    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.shop[0].text, "bread");
    assert_eq!(state.shop[1].text, "oat milk");

    run(
        &session,
        Commands::Shop {
            action: ShopAction::Done { index: 1 },
        },
    );
    let state = AppState::load(session.storage()).unwrap();
    assert!(state.shop[0].done);

    run(
        &session,
        Commands::Shop {
            action: ShopAction::Remove { index: 2 },
        },
    );
    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.shop.len(), 1);
    assert_eq!(state.shop[0].text, "bread");
}

#[test]
fn test_shop_ingredients_prepends_recipe_lines_in_order() {
    let session = seeded_session();
    run(
        &session,
        Commands::Shop {
            action: ShopAction::Add {
                text: vec!["existing".to_string()],
            },
        },
    );
    run(
        &session,
        Commands::Shop {
            action: ShopAction::Ingredients {
                id: "seed_food_0".to_string(),
            },
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    let recipe_lines: Vec<&str> = state
        .store
        .get("seed_food_0")
        .unwrap()
        .ingredients
        .lines()
        .collect();

    // Recipe lines sit at the front in recipe order, old items after.
    assert_eq!(state.shop[0].text, recipe_lines[0]);
    assert_eq!(state.shop[1].text, recipe_lines[1]);
    assert_eq!(state.shop.last().unwrap().text, "existing");
}

#[test]
fn test_units_set_and_show() {
    let session = seeded_session();
    run(
        &session,
        Commands::Units {
            value: Some(Units::Imperial),
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.units, Units::Imperial);

    run(&session, Commands::Units { value: None });
}

#[test]
fn test_age_command_sets_answer() {
    let session = seeded_session();
    run(
        &session,
        Commands::Age {
            answer: Some(AgeAnswer::Yes),
        },
    );
    let state = AppState::load(session.storage()).unwrap();
    assert!(state.cocktails_unlocked());
}

#[test]
fn test_cocktail_gate_noninteractive_leaves_answer_unset() {
    let session = seeded_session();
    run(
        &session,
        Commands::List {
            query: None,
            kind: KindArg::Cocktail,
            mood: None,
            allergen: None,
            limit: 5,
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.age, None);
}

#[test]
fn test_cocktail_gate_interactive_stores_confirmation() {
    let session = MockSession::with_prompt(MockPrompt::interactive());
    let catalogue = build_catalogue(50, 10, &StopwordSet::default());
    save(session.storage(), StoreKey::Recipes, &catalogue).unwrap();
    session.prompt_mock().queue_confirm(true);

    run(
        &session,
        Commands::Show {
            id: "seed_cocktail_0".to_string(),
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert!(state.cocktails_unlocked());
}

#[test]
fn test_cocktail_gate_interactive_refusal_locks() {
    let session = MockSession::with_prompt(MockPrompt::interactive());
    let catalogue = build_catalogue(50, 10, &StopwordSet::default());
    save(session.storage(), StoreKey::Recipes, &catalogue).unwrap();
    session.prompt_mock().queue_confirm(false);

    run(
        &session,
        Commands::Show {
            id: "seed_cocktail_0".to_string(),
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.age, Some(AgeAnswer::No));
}

#[test]
fn test_reseed_preserves_user_recipe_and_favs() {
    let session = seeded_session();
    run(
        &session,
        Commands::Add {
            name: Some("Keeper".to_string()),
            kind: KindArg::Food,
            level: None,
            moods: None,
            allergens: None,
            serves: None,
            time: None,
            history: None,
            ingredients: vec!["bread".to_string()],
            method: Some("keep".to_string()),
            variations: None,
        },
    );
    let state = AppState::load(session.storage()).unwrap();
    let my_id = state.store.mine()[0].id.clone();

    run(&session, Commands::Fav { id: my_id.clone() });
    run(
        &session,
        Commands::Seed {
            food: Some(60),
            cocktails: Some(10),
        },
    );

    let state = AppState::load(session.storage()).unwrap();
    assert_eq!(state.store.catalogue().len(), 70);
    assert!(state.store.get(&my_id).is_some());
    assert!(state.favs.contains(&my_id));
}

#[test]
fn test_list_and_show_run_cleanly() {
    let session = seeded_session();
    run(
        &session,
        Commands::List {
            query: Some("stew".to_string()),
            kind: KindArg::Food,
            mood: None,
            allergen: None,
            limit: 5,
        },
    );
    run(
        &session,
        Commands::Show {
            id: "seed_food_0".to_string(),
        },
    );
    run(
        &session,
        Commands::Show {
            id: "ghost".to_string(),
        },
    );
    run(&session, Commands::Version);
}
