use super::*;

#[test]
fn test_metric_passthrough() {
    let text = "300 g chicken\n1 onion";
    assert_eq!(format_ingredients(text, Units::Metric), text);
}

#[test]
fn test_grams_to_ounces() {
    // 10.58 oz rounds to a whole number at >= 10
    assert_eq!(
        format_ingredients("300 g chicken", Units::Imperial),
        "11 oz chicken"
    );
}

#[test]
fn test_kilograms_to_pounds() {
    assert_eq!(
        format_ingredients("2 kg potatoes", Units::Imperial),
        "4.4 lb potatoes"
    );
}

#[test]
fn test_millilitres_to_fluid_ounces() {
    assert_eq!(
        format_ingredients("250 ml stock", Units::Imperial),
        "8.5 fl oz stock"
    );
}

#[test]
fn test_litres_to_fluid_ounces() {
    assert_eq!(
        format_ingredients("1 l water", Units::Imperial),
        "34 fl oz water"
    );
}

#[test]
fn test_small_quantities_keep_two_decimals() {
    // 20 g -> 0.71 oz
    assert_eq!(
        format_ingredients("20 g yeast", Units::Imperial),
        "0.71 oz yeast"
    );
}

#[test]
fn test_unconvertible_lines_pass_through() {
    let text = "1 onion\n2 cloves garlic\nIce";
    assert_eq!(format_ingredients(text, Units::Imperial), text);
}

#[test]
fn test_longer_unit_words_are_not_converted() {
    // "grams" is not the bare unit "g"; the line passes through.
    assert_eq!(
        format_ingredients("300 grams chicken", Units::Imperial),
        "300 grams chicken"
    );
}

#[test]
fn test_attached_unit_converts() {
    assert_eq!(
        format_ingredients("300g chicken", Units::Imperial),
        "11 oz chicken"
    );
}

#[test]
fn test_decimal_quantities() {
    // 1.5 kg -> 3.3 lb
    assert_eq!(
        format_ingredients("1.5 kg beef", Units::Imperial),
        "3.3 lb beef"
    );
}

#[test]
fn test_mixed_block_converts_line_by_line() {
    let text = "300 g chicken\n1 onion\n250 ml stock";
    assert_eq!(
        format_ingredients(text, Units::Imperial),
        "11 oz chicken\n1 onion\n8.5 fl oz stock"
    );
}

#[test]
fn test_malformed_number_passes_through() {
    assert_eq!(
        format_ingredients("1.2.3 g sugar", Units::Imperial),
        "1.2.3 g sugar"
    );
}
