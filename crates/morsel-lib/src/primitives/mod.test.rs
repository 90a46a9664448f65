use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_units_parsing() {
    assert_eq!("metric".parse::<Units>().unwrap(), Units::Metric);
    assert_eq!("imperial".parse::<Units>().unwrap(), Units::Imperial);
    assert!("stones".parse::<Units>().is_err());
}

#[test]
fn test_units_default_is_metric() {
    assert_eq!(Units::default(), Units::Metric);
}

#[test]
fn test_age_answer_round_trips_through_json() {
    let yes: AgeAnswer = serde_json::from_str("\"yes\"").unwrap();
    assert_eq!(yes, AgeAnswer::Yes);
    assert_eq!(serde_json::to_string(&AgeAnswer::No).unwrap(), "\"no\"");
}

#[test]
fn test_recipe_kind_parse_and_display() {
    assert_eq!("cocktail".parse::<RecipeKind>().unwrap(), RecipeKind::Cocktail);
    assert_eq!("FOOD".parse::<RecipeKind>().unwrap(), RecipeKind::Food);
    assert!("dessert".parse::<RecipeKind>().is_err());
    assert_eq!(RecipeKind::Cocktail.to_string(), "cocktail");
}

#[test]
fn test_log_format_aliases() {
    assert_eq!("txt".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
}
