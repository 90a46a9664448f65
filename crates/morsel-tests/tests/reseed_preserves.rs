//! Reseeding replaces the catalogue and nothing else

use morsel_tests::TestEnvironment;

#[test]
fn reseed_keeps_user_recipes_favs_shop_and_pantry() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command()
        .args([
            "add",
            "--name",
            "Keeper Pie",
            "-i",
            "1 pie crust",
            "--method",
            "Bake it.",
        ])
        .assert()
        .success();
    env.command().args(["fav", "seed_food_1"]).assert().success();
    env.command().args(["shop", "add", "flour"]).assert().success();
    env.command()
        .args(["pantry", "add", "butter"])
        .assert()
        .success();

    // Different counts so replacement is observable.
    env.command()
        .args(["seed", "--food", "80", "--cocktails", "20"])
        .assert()
        .success();

    let recipes = env.read_key("recipes.json");
    assert_eq!(recipes.as_array().unwrap().len(), 100);

    let mine = env.read_recipes("my_recipes.json");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Keeper Pie");
    assert_eq!(mine[0].kind, morsel_lib::RecipeKind::Food);

    let favs = env.read_key("favs.json");
    assert_eq!(favs.as_array().unwrap().len(), 1);

    let shop = env.read_key("shop.json");
    assert_eq!(shop[0]["text"], "flour");

    let finder = env.read_key("finder.json");
    assert_eq!(finder[0], "butter");
}

#[test]
fn first_run_seeds_a_full_catalogue() {
    let env = TestEnvironment::new();

    // Any command on a fresh data dir seeds and persists the catalogue.
    env.command().args(["pantry", "list"]).assert().success();

    let recipes = env.read_key("recipes.json");
    assert_eq!(recipes.as_array().unwrap().len(), 1800);
}

#[test]
fn malformed_state_files_are_replaced_not_fatal() {
    let env = TestEnvironment::new();
    env.seed_small();

    env.command().args(["fav", "seed_food_1"]).assert().success();

    // Corrupt a key by hand; the next run treats it as absent.
    let favs_path = env.read_key("favs.json");
    assert_eq!(favs_path.as_array().unwrap().len(), 1);
    env.write_key_raw("favs.json", "corrupt ][ json");

    env.command().args(["book"]).assert().success();
    env.command().args(["fav", "seed_food_2"]).assert().success();

    let favs = env.read_key("favs.json");
    assert_eq!(favs.as_array().unwrap().len(), 1);
}
