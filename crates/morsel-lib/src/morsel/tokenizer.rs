//! Ingredient text tokenization with stopword-based filtering
//!
//! Turns free-text ingredient blocks into normalized token sets for the
//! matcher. Quantities, units, and preparation words are noise for matching
//! purposes and are stripped here, once, at ingestion.
//!
//! # Algorithm Overview
//!
//! Per non-empty trimmed line:
//! - lowercase, blank out digits and parentheses
//! - blank out anything that is not a lowercase letter or whitespace
//! - split on whitespace, keep tokens of length >= 3 not in the stopword set
//!
//! The result is a `BTreeSet`: deduplicated, with a stable iteration order
//! so ranked output stays deterministic.
//!
//! # Examples
//!
//! ```
//! use morsel_lib::morsel::tokenizer::{StopwordSet, tokenize};
//!
//! let stops = StopwordSet::default();
//! let tokens = tokenize("300 g chicken\n1 onion, chopped", &stops);
//! assert!(tokens.contains("chicken"));
//! assert!(tokens.contains("onion"));
//! assert!(!tokens.contains("chopped"));
//! ```

use std::collections::BTreeSet;

/// Minimum length for a significant token
const MIN_TOKEN_LEN: usize = 3;

/// Words excluded from ingredient token sets
///
/// Units, quantity words, and preparation adjectives. One- and two-letter
/// units ("g", "kg", "ml", "l") never survive the length rule and are not
/// listed.
const DEFAULT_STOPWORDS: &[&str] = &[
    // units and measures
    "cup", "cups", "tbsp", "tsp", "teaspoon", "tablespoon", "gram", "grams", "litre", "liter",
    "pinch", "dash",
    // preparation words
    "chopped", "sliced", "diced", "minced", "optional", "fresh",
    // filler
    "taste", "small", "large", "medium", "top", "with", "and", "or", "ice",
];

/// Near-universal pantry items some catalogues prefer to ignore
///
/// Not excluded by default; opt in via [`StopwordSet::with_pantry_staples`].
const PANTRY_STAPLES: &[&str] = &["salt", "pepper", "oil"];

/// Configurable exclusion list for [`tokenize`]
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: BTreeSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self {
            words: DEFAULT_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl StopwordSet {
    /// Empty exclusion list (every token of sufficient length survives)
    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    /// Default list plus salt, pepper, and oil
    pub fn with_pantry_staples() -> Self {
        let mut set = Self::default();
        for word in PANTRY_STAPLES {
            set.insert(word);
        }
        set
    }

    /// Add a word to the exclusion list
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.trim().to_lowercase())
    }

    /// Remove a word from the exclusion list
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(&word.trim().to_lowercase())
    }

    /// Check whether a word is excluded
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Extract the normalized ingredient token set from free text
///
/// Total over its input domain: empty or garbage text yields an empty set.
/// Idempotent on its own output joined with spaces.
pub fn tokenize(text: &str, stopwords: &StopwordSet) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cleaned: String = line
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_lowercase() || c.is_whitespace() { c } else { ' ' })
            .collect();

        for word in cleaned.split_whitespace() {
            if word.len() >= MIN_TOKEN_LEN && !stopwords.contains(word) {
                tokens.insert(word.to_string());
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    include!("tokenizer.test.rs");
}
