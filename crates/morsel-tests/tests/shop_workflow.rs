//! End-to-end shopping list workflow

use morsel_tests::TestEnvironment;
use predicates::prelude::*;

#[test]
fn items_stack_newest_first() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["shop", "add", "oat", "milk"])
        .assert()
        .success();
    env.command().args(["shop", "add", "bread"]).assert().success();

    let shop = env.read_key("shop.json");
    let items = shop.as_array().unwrap();
    assert_eq!(items[0]["text"], "bread");
    assert_eq!(items[1]["text"], "oat milk");
    assert_eq!(items[0]["done"], false);
}

#[test]
fn done_toggles_and_remove_deletes_by_position() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command().args(["shop", "add", "bread"]).assert().success();
    env.command().args(["shop", "add", "milk"]).assert().success();

    env.command()
        .args(["shop", "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("done: milk"));

    let shop = env.read_key("shop.json");
    assert_eq!(shop[0]["done"], true);

    env.command()
        .args(["shop", "remove", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed: bread"));

    let shop = env.read_key("shop.json");
    assert_eq!(shop.as_array().unwrap().len(), 1);
}

#[test]
fn out_of_range_positions_are_refused() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["shop", "done", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no such item"));

    env.command()
        .args(["shop", "remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no such item"));
}

#[test]
fn recipe_ingredients_feed_the_list() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args(["shop", "ingredients", "seed_food_0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ingredient line(s)"));

    let shop = env.read_key("shop.json");
    let items = shop.as_array().unwrap();
    assert!(!items.is_empty());
    // First shopping item is the recipe's first ingredient line.
    assert_eq!(items[0]["text"], "300 g chicken");
}

#[test]
fn clear_empties_the_list() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command().args(["shop", "add", "bread"]).assert().success();
    env.command().args(["shop", "clear"]).assert().success();

    let shop = env.read_key("shop.json");
    assert!(shop.as_array().unwrap().is_empty());

    env.command()
        .args(["shop", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping list is empty"));
}
