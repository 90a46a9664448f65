//! End-to-end pantry and finder workflow

use morsel_tests::TestEnvironment;
use predicates::prelude::*;

#[test]
fn finder_ranks_recipes_from_pantry() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args([
            "pantry", "add", "chicken", "onion", "garlic", "stock", "paprika", "salt", "pepper",
            "oil",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("pantry"));

    // Generous tolerance: seeded food recipes share the pantry staples.
    env.command()
        .args(["find", "--tolerance", "80", "--kind", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("match"));

    // The pantry is persisted under the finder key.
    let finder = env.read_key("finder.json");
    let items: Vec<String> = serde_json::from_value(finder).unwrap();
    assert!(items.contains(&"chicken".to_string()));
}

#[test]
fn empty_pantry_prompts_instead_of_ranking() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["find"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pantry is empty"));
}

#[test]
fn zero_tolerance_needs_a_full_pantry() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["pantry", "add", "chicken"])
        .assert()
        .success();

    env.command()
        .args(["find", "--tolerance", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing makeable"));
}

#[test]
fn pantry_clear_empties_the_persisted_set() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["pantry", "add", "chicken", "garlic"])
        .assert()
        .success();
    env.command().args(["pantry", "clear"]).assert().success();

    let finder = env.read_key("finder.json");
    let items: Vec<String> = serde_json::from_value(finder).unwrap();
    assert!(items.is_empty());

    env.command()
        .args(["pantry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pantry is empty"));
}

#[test]
fn tolerance_above_100_is_rejected() {
    let env = TestEnvironment::new();
    env.command()
        .args(["find", "--tolerance", "120"])
        .assert()
        .failure();
}
