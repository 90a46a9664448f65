use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("args should parse")
}

#[test]
fn test_no_command_is_valid() {
    let cli = parse(&["morsel"]);
    assert!(cli.command.is_none());
}

#[test]
fn test_list_with_filters() {
    let cli = parse(&[
        "morsel", "list", "stew", "--kind", "food", "--mood", "Comfort", "--allergen", "Gluten",
    ]);
    match cli.command {
        Some(Commands::List {
            query,
            kind,
            mood,
            allergen,
            limit,
        }) => {
            assert_eq!(query.as_deref(), Some("stew"));
            assert_eq!(kind, KindArg::Food);
            assert_eq!(mood.as_deref(), Some("Comfort"));
            assert_eq!(allergen.as_deref(), Some("Gluten"));
            assert_eq!(limit, 20);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_find_tolerance_bounds() {
    let cli = parse(&["morsel", "find", "--tolerance", "35"]);
    match cli.command {
        Some(Commands::Find { tolerance, .. }) => assert_eq!(tolerance, 35),
        other => panic!("unexpected command: {other:?}"),
    }

    assert!(Cli::try_parse_from(["morsel", "find", "--tolerance", "120"]).is_err());
}

#[test]
fn test_find_default_tolerance() {
    let cli = parse(&["morsel", "find"]);
    match cli.command {
        Some(Commands::Find {
            tolerance, kind, ..
        }) => {
            assert_eq!(tolerance, 20);
            assert_eq!(kind, KindArg::All);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_rate_rejects_out_of_range_stars() {
    assert!(Cli::try_parse_from(["morsel", "rate", "seed_food_1", "0"]).is_err());
    assert!(Cli::try_parse_from(["morsel", "rate", "seed_food_1", "6"]).is_err());

    let cli = parse(&["morsel", "rate", "seed_food_1", "5"]);
    match cli.command {
        Some(Commands::Rate { id, stars }) => {
            assert_eq!(id, "seed_food_1");
            assert_eq!(stars, 5);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_add_collects_repeated_ingredient_flags() {
    let cli = parse(&[
        "morsel",
        "add",
        "--name",
        "Midnight Toast",
        "-i",
        "2 slices bread",
        "-i",
        "1 tbsp butter",
        "--method",
        "Toast. Butter.",
    ]);
    match cli.command {
        Some(Commands::Add {
            name, ingredients, ..
        }) => {
            assert_eq!(name.as_deref(), Some("Midnight Toast"));
            assert_eq!(ingredients.len(), 2);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_pantry_subcommands() {
    let cli = parse(&["morsel", "pantry", "add", "chicken", "garlic"]);
    match cli.command {
        Some(Commands::Pantry {
            action: PantryAction::Add { items },
        }) => assert_eq!(items, vec!["chicken", "garlic"]),
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = parse(&["morsel", "pantry", "clear"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Pantry {
            action: PantryAction::Clear
        })
    ));
}

#[test]
fn test_shop_subcommands() {
    let cli = parse(&["morsel", "shop", "done", "2"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Shop {
            action: ShopAction::Done { index: 2 }
        })
    ));

    let cli = parse(&["morsel", "shop", "ingredients", "seed_food_1"]);
    match cli.command {
        Some(Commands::Shop {
            action: ShopAction::Ingredients { id },
        }) => assert_eq!(id, "seed_food_1"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_units_and_age_accept_value_enums() {
    let cli = parse(&["morsel", "units", "imperial"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Units {
            value: Some(Units::Imperial)
        })
    ));

    let cli = parse(&["morsel", "age", "yes"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Age {
            answer: Some(AgeAnswer::Yes)
        })
    ));

    assert!(Cli::try_parse_from(["morsel", "age", "maybe"]).is_err());
}

#[test]
fn test_kind_arg_narrowing() {
    assert_eq!(KindArg::All.to_kind(), None);
    assert_eq!(KindArg::Food.to_kind(), Some(RecipeKind::Food));
    assert_eq!(KindArg::Cocktail.to_kind(), Some(RecipeKind::Cocktail));
}
