use super::*;

#[test]
fn test_join_with_and_without_details() {
    assert_eq!(join("saved", "My Pie"), "saved: My Pie");
    assert_eq!(join("saved", ""), "saved");
}

#[test]
fn test_display_construction_for_all_color_choices() {
    // Styling must never panic regardless of terminal state.
    for choice in [ColorChoice::Auto, ColorChoice::Always, ColorChoice::Never] {
        let display = Display::new(choice);
        display.status().message("hello");
    }
}

#[test]
fn test_never_choice_produces_plain_styles() {
    let display = Display::new(ColorChoice::Never);
    let styled = display
        .styles
        .success
        .apply_to("plain")
        .to_string();
    assert_eq!(styled, "plain");
}
