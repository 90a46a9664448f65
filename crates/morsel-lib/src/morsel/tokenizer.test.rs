use super::*;

// ============================================================================
// Tokenization Tests
// ============================================================================

#[test]
fn test_tokenize_strips_quantities_and_prep_words() {
    let stops = StopwordSet::default();
    let tokens = tokenize("300 g chicken\n1 onion, chopped", &stops);

    assert!(tokens.contains("chicken"));
    assert!(tokens.contains("onion"));
    assert!(!tokens.contains("chopped"));
    assert!(!tokens.contains("g"), "short units never survive");
}

#[test]
fn test_tokenize_deduplicates() {
    let stops = StopwordSet::default();
    let tokens = tokenize("1 onion\n2 onion\nonion rings", &stops);

    assert_eq!(tokens.iter().filter(|t| *t == "onion").count(), 1);
    assert!(tokens.contains("rings"));
}

#[test]
fn test_tokenize_empty_and_garbage_input() {
    let stops = StopwordSet::default();
    assert!(tokenize("", &stops).is_empty());
    assert!(tokenize("   \n\n  ", &stops).is_empty());
    assert!(tokenize("12 34 !!! (()) --", &stops).is_empty());
}

#[test]
fn test_tokenize_strips_parentheses_and_punctuation() {
    let stops = StopwordSet::default();
    let tokens = tokenize("250 ml stock (low-sodium)", &stops);

    assert!(tokens.contains("stock"));
    assert!(tokens.contains("low"));
    assert!(tokens.contains("sodium"));
    assert!(!tokens.contains("ml"));
}

#[test]
fn test_tokenize_drops_short_tokens() {
    let stops = StopwordSet::default();
    let tokens = tokenize("ox au vin", &stops);

    assert!(tokens.contains("vin"));
    assert!(!tokens.contains("ox"));
    assert!(!tokens.contains("au"));
}

#[test]
fn test_tokenize_is_idempotent_on_own_output() {
    let stops = StopwordSet::default();
    let text = "300 g chicken breast\n1 large onion, chopped\n2 tbsp garlic butter";
    let first = tokenize(text, &stops);

    let rejoined: Vec<String> = first.iter().cloned().collect();
    let second = tokenize(&rejoined.join(" "), &stops);

    assert_eq!(first, second);
}

#[test]
fn test_tokenize_is_case_insensitive() {
    let stops = StopwordSet::default();
    let tokens = tokenize("CHICKEN Breast", &stops);

    assert!(tokens.contains("chicken"));
    assert!(tokens.contains("breast"));
}

// ============================================================================
// StopwordSet Tests
// ============================================================================

#[test]
fn test_default_stopwords_exclude_units_not_staples() {
    let stops = StopwordSet::default();
    assert!(stops.contains("tbsp"));
    assert!(stops.contains("chopped"));
    assert!(stops.contains("ice"));
    assert!(!stops.contains("salt"));
}

#[test]
fn test_pantry_staples_extension() {
    let stops = StopwordSet::with_pantry_staples();
    let tokens = tokenize("1 tsp salt\n1 tsp pepper\n300 g chicken", &stops);

    assert!(!tokens.contains("salt"));
    assert!(!tokens.contains("pepper"));
    assert!(tokens.contains("chicken"));
}

#[test]
fn test_stopword_set_is_editable() {
    let mut stops = StopwordSet::default();
    assert!(stops.insert("Paprika"));
    assert!(stops.contains("paprika"));
    assert!(stops.remove("paprika"));
    assert!(!stops.contains("paprika"));

    assert!(stops.remove("ice"));
    let tokens = tokenize("Ice cubes", &stops);
    assert!(tokens.contains("ice"));
}

#[test]
fn test_empty_stopword_set_keeps_everything_long_enough() {
    let stops = StopwordSet::empty();
    let tokens = tokenize("1 cup rice, chopped", &stops);

    assert!(tokens.contains("cup"));
    assert!(tokens.contains("chopped"));
    assert!(tokens.contains("rice"));
}
