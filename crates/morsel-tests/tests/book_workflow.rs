//! End-to-end add-recipe, favourites, and book workflow

use morsel_tests::TestEnvironment;
use predicates::prelude::*;

#[test]
fn added_recipe_lands_in_the_book() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args([
            "add",
            "--name",
            "Midnight Toast",
            "-i",
            "2 slices bread",
            "-i",
            "1 tbsp butter",
            "--method",
            "Toast. Butter. Eat.",
            "--moods",
            "Quick, Comfort",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved"));

    env.command()
        .assert()
        .success();

    env.command()
        .args(["book"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Midnight Toast"));

    let mine = env.read_key("my_recipes.json");
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["name"], "Midnight Toast");
    assert_eq!(mine[0]["source"], "user");
}

#[test]
fn add_without_required_fields_fails_politely() {
    let env = TestEnvironment::new();
    env.seed_small();

    // Non-interactive and missing the name: refused with a message, exit 0.
    env.command()
        .args(["add", "-i", "bread", "--method", "toast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not saved"));

    assert!(!env.key_exists("my_recipes.json") || {
        let mine = env.read_key("my_recipes.json");
        mine.as_array().unwrap().is_empty()
    });
}

#[test]
fn fav_toggles_into_and_out_of_the_book() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["fav", "seed_food_3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added to your book"));

    let favs = env.read_key("favs.json");
    assert_eq!(favs.as_array().unwrap().len(), 1);

    env.command()
        .args(["fav", "seed_food_3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed from your book"));

    let favs = env.read_key("favs.json");
    assert!(favs.as_array().unwrap().is_empty());
}

#[test]
fn rating_and_comment_show_on_the_card() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["rate", "seed_food_1", "5"])
        .assert()
        .success();
    env.command()
        .args(["rate", "seed_food_1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.0 stars (2)"));

    env.command()
        .args(["comment", "seed_food_1", "lovely", "with", "garlic"])
        .assert()
        .success();

    env.command()
        .args(["show", "seed_food_1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.0 stars (2)"))
        .stdout(predicate::str::contains("lovely with garlic"));
}

#[test]
fn unrated_recipe_shows_the_sentinel_not_zero() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["show", "seed_food_2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unrated"));
}
