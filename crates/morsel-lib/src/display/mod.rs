//! Terminal display for user-facing output
//!
//! Separates user interaction from diagnostics: tracing logs go to the
//! logger, everything the user is meant to read goes through here. Styling
//! degrades to plain text when color is off or no terminal is attached.

use crate::primitives::ColorChoice;
use console::Style;

/// Display manager holding the resolved style set
#[derive(Debug, Clone)]
pub struct Display {
    styles: Styles,
}

#[derive(Debug, Clone)]
struct Styles {
    success: Style,
    error: Style,
    warning: Style,
    info: Style,
    emphasis: Style,
    subtle: Style,
    section: Style,
}

impl Display {
    pub fn new(color: ColorChoice) -> Self {
        let enabled = match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => console::colors_enabled(),
        };

        let style = |s: Style| if enabled { s } else { Style::new() };

        Self {
            styles: Styles {
                success: style(Style::new().green()),
                error: style(Style::new().red()),
                warning: style(Style::new().yellow()),
                info: style(Style::new().dim()),
                emphasis: style(Style::new().bold()),
                subtle: style(Style::new().dim()),
                section: style(Style::new().bold().underlined()),
            },
        }
    }

    pub fn status(&self) -> StatusDisplay<'_> {
        StatusDisplay { styles: &self.styles }
    }
}

/// Semantic status output
///
/// Example: `display.status().success("saved", "My Pie")` prints
/// `✓ saved: My Pie`.
pub struct StatusDisplay<'a> {
    styles: &'a Styles,
}

impl StatusDisplay<'_> {
    pub fn success(&self, item: &str, details: &str) {
        let text = join(item, details);
        println!("{}", self.styles.success.apply_to(format!("✓ {text}")));
    }

    pub fn error(&self, item: &str, details: &str) {
        let text = join(item, details);
        println!("{}", self.styles.error.apply_to(format!("✗ {text}")));
    }

    pub fn warning(&self, message: &str) {
        println!("{}", self.styles.warning.apply_to(format!("! {message}")));
    }

    pub fn info(&self, message: &str) {
        println!("{}", self.styles.info.apply_to(format!("· {message}")));
    }

    /// Plain message without a status symbol
    pub fn message(&self, text: &str) {
        println!("{text}");
    }

    pub fn emphasis(&self, text: &str) {
        println!("{}", self.styles.emphasis.apply_to(text));
    }

    pub fn subtle(&self, text: &str) {
        println!("{}", self.styles.subtle.apply_to(text));
    }

    pub fn section(&self, title: &str) {
        println!("\n{}", self.styles.section.apply_to(title));
    }

    /// Bulleted list
    pub fn list(&self, items: &[String]) {
        for item in items {
            println!("  - {item}");
        }
    }
}

fn join(item: &str, details: &str) -> String {
    if details.is_empty() {
        item.to_string()
    } else {
        format!("{item}: {details}")
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
