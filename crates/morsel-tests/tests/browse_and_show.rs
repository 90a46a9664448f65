//! End-to-end browsing, recipe cards, units, and the age gate

use morsel_tests::TestEnvironment;
use predicates::prelude::*;

#[test]
fn list_filters_by_query_and_kind() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["list", "stew", "--kind", "food", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stew"));

    env.command()
        .args(["list", "no-recipe-has-this-name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes match"));
}

#[test]
fn list_filters_by_mood() {
    let env = TestEnvironment::new();
    env.seed_small();

    // Every seeded mood tag comes from a fixed pool; "Comfort" always lands.
    env.command()
        .args(["list", "--mood", "Comfort", "--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe(s)"));
}

#[test]
fn show_renders_the_full_card() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["show", "seed_food_0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ingredients"))
        .stdout(predicate::str::contains("Method"))
        .stdout(predicate::str::contains("300 g chicken"))
        .stdout(predicate::str::contains("unrated"));
}

#[test]
fn show_unknown_id_is_a_message_not_a_crash() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["show", "ghost_recipe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no such recipe"));
}

#[test]
fn imperial_units_convert_the_ingredients_tab() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["units", "imperial"])
        .assert()
        .success();

    // 300 g -> 11 oz on the rendered card; stored text stays metric.
    env.command()
        .args(["show", "seed_food_0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11 oz chicken"));

    let recipes = env.read_key("recipes.json");
    assert!(
        recipes[0]["ingredients"]
            .as_str()
            .unwrap()
            .contains("300 g chicken")
    );
}

#[test]
fn cocktails_are_gated_until_age_yes() {
    let env = TestEnvironment::new();
    env.seed_small();

    // Non-interactive run cannot answer the gate.
    env.command()
        .args(["list", "--kind", "cocktail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("age-gated"));

    env.command().args(["age", "yes"]).assert().success();

    env.command()
        .args(["list", "--kind", "cocktail", "--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cocktail"));

    env.command()
        .args(["show", "seed_cocktail_0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alcohol"));
}

#[test]
fn age_no_locks_cocktails() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command().args(["age", "no"]).assert().success();

    env.command()
        .args(["show", "seed_cocktail_0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locked"));
}
