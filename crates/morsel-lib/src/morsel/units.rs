//! Metric/imperial rendering of ingredient lines
//!
//! Lines beginning with a quantity and a short metric unit ("300 g …",
//! "250 ml …") are converted for imperial display; anything else passes
//! through untouched. Conversion is display-only; stored text stays metric.

use crate::primitives::Units;

const G_TO_OZ: f64 = 0.035274;
const KG_TO_LB: f64 = 2.20462;
const ML_TO_FLOZ: f64 = 0.033814;
const L_TO_FLOZ: f64 = 33.814;

/// Render an ingredients block for the selected measurement system
pub fn format_ingredients(text: &str, units: Units) -> String {
    match units {
        Units::Metric => text.to_string(),
        Units::Imperial => text
            .lines()
            .map(convert_line)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Convert one `<qty> <g|kg|ml|l>` line to imperial; pass through otherwise
fn convert_line(line: &str) -> String {
    let s = line.trim();
    let Some((qty, unit, rest)) = split_quantity(s) else {
        return line.to_string();
    };

    let converted = match unit {
        "g" => format!("{} oz", round_nice(qty * G_TO_OZ)),
        "kg" => format!("{} lb", round_nice(qty * KG_TO_LB)),
        "ml" => format!("{} fl oz", round_nice(qty * ML_TO_FLOZ)),
        "l" => format!("{} fl oz", round_nice(qty * L_TO_FLOZ)),
        _ => return line.to_string(),
    };

    format!("{} {}", converted, rest).trim().to_string()
}

/// Split a leading `<number> <unit>` prefix off a line
///
/// The unit must end at a word boundary: "300 g flour" splits, "300 grams"
/// does not (and is left for the tokenizer-style passthrough).
fn split_quantity(s: &str) -> Option<(f64, &'static str, &str)> {
    let digits = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    if digits == 0 || !s.as_bytes()[0].is_ascii_digit() {
        return None;
    }
    let qty: f64 = s[..digits].parse().ok()?;
    let after = s[digits..].trim_start();

    // Longest units first so "ml"/"kg" are not read as "l"/"g".
    for unit in ["kg", "ml", "g", "l"] {
        let Some(prefix) = after.get(..unit.len()) else {
            continue;
        };
        if prefix.eq_ignore_ascii_case(unit) {
            let boundary = after[unit.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_ascii_alphanumeric());
            if boundary {
                return Some((qty, unit, after[unit.len()..].trim_start()));
            }
        }
    }
    None
}

/// Round for display: two decimals under 1, one under 10, whole above
fn round_nice(n: f64) -> String {
    if n < 1.0 {
        format!("{n:.2}")
    } else if n < 10.0 {
        format!("{n:.1}")
    } else {
        format!("{}", n.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    include!("units.test.rs");
}
