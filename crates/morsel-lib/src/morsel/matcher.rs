//! Ingredient matching and recipe ranking
//!
//! Given the pantry (the normalized "ingredients I have" set) and a
//! tolerance for missing ingredients, score every candidate recipe by
//! matched/missing token counts and produce a ranked, filtered list.
//!
//! # Algorithm Overview
//!
//! 1. Filter candidates by kind and allergen
//! 2. Score each recipe: `matched = |tokens ∩ have|`, `missing = |tokens − have|`
//! 3. `missing_pct = missing / |tokens| * 100`, or 100 for token-less recipes
//!    (vacuous ingredient text can never match)
//! 4. Keep recipes with `missing_pct <= tolerance`
//! 5. Stable sort: matched descending, then missing ascending
//! 6. Cap at [`RESULT_CAP`] entries (rendering bound)
//!
//! An empty pantry produces no ranking at all (`None`), which is distinct
//! from a ranking with zero results.

use crate::morsel::store::Recipe;
use crate::primitives::RecipeKind;
use serde::{Deserialize, Serialize};

/// Upper bound on ranked results handed to the presentation layer
pub const RESULT_CAP: usize = 80;

/// The user's on-hand ingredients
///
/// Entries are normalized (lowercased, trimmed) and deduplicated; insertion
/// order is preserved because it is meaningful for display. Persisted as a
/// plain JSON array under the `finder` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HaveSet {
    items: Vec<String>,
}

impl HaveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient; returns false if it was already present or blank
    pub fn add(&mut self, raw: &str) -> bool {
        let item = raw.trim().to_lowercase();
        if item.is_empty() || self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove an ingredient; returns false if it was not present
    pub fn remove(&mut self, raw: &str) -> bool {
        let item = raw.trim().to_lowercase();
        let before = self.items.len();
        self.items.retain(|i| *i != item);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, token: &str) -> bool {
        self.items.iter().any(|i| i == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Candidate filters applied before scoring
#[derive(Debug, Clone, Default)]
pub struct FinderFilters {
    /// Keep only this recipe kind (None keeps both)
    pub kind: Option<RecipeKind>,
    /// Keep only recipes carrying this allergen tag
    pub allergen: Option<String>,
}

impl FinderFilters {
    fn admits(&self, recipe: &Recipe) -> bool {
        if self.kind.is_some_and(|k| k != recipe.kind) {
            return false;
        }
        if let Some(allergen) = &self.allergen {
            if !recipe
                .allergens
                .iter()
                .any(|a| a.eq_ignore_ascii_case(allergen))
            {
                return false;
            }
        }
        true
    }
}

/// A scored candidate: the recipe plus its matched and missing tokens
#[derive(Debug, Clone)]
pub struct RankedMatch<'a> {
    pub recipe: &'a Recipe,
    /// Recipe tokens found in the pantry (token-set iteration order)
    pub matched: Vec<String>,
    /// Recipe tokens absent from the pantry
    pub missing: Vec<String>,
}

impl<'a> RankedMatch<'a> {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Share of the recipe's tokens absent from the pantry
    ///
    /// A recipe with no extractable tokens reports 100: garbage ingredient
    /// text always fails matching, at any tolerance.
    pub fn missing_pct(&self) -> f64 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            100.0
        } else {
            self.missing.len() as f64 / total as f64 * 100.0
        }
    }

    /// True when every recipe token is on hand
    pub fn is_perfect(&self) -> bool {
        !self.matched.is_empty() && self.missing.is_empty()
    }
}

fn score<'a>(recipe: &'a Recipe, have: &HaveSet) -> RankedMatch<'a> {
    let (matched, missing): (Vec<String>, Vec<String>) = recipe
        .tokens()
        .iter()
        .cloned()
        .partition(|token| have.contains(token));

    RankedMatch {
        recipe,
        matched,
        missing,
    }
}

/// Rank candidates against the pantry within a missing-ingredient tolerance
///
/// Returns `None` when the pantry is empty: no ranking is performed, and the
/// caller renders a prompt state instead of degenerate scores. Pure function
/// of its inputs; candidate order is the tie-break of last resort (the sort
/// is stable).
pub fn rank<'a>(
    have: &HaveSet,
    candidates: impl IntoIterator<Item = &'a Recipe>,
    tolerance_pct: u8,
    filters: &FinderFilters,
) -> Option<Vec<RankedMatch<'a>>> {
    if have.is_empty() {
        return None;
    }

    let mut ranked: Vec<RankedMatch<'a>> = candidates
        .into_iter()
        .filter(|r| filters.admits(r))
        .map(|r| score(r, have))
        .filter(|m| m.missing_pct() <= f64::from(tolerance_pct))
        .collect();

    ranked.sort_by(|a, b| {
        b.matched_count()
            .cmp(&a.matched_count())
            .then(a.missing_count().cmp(&b.missing_count()))
    });
    ranked.truncate(RESULT_CAP);

    Some(ranked)
}

#[cfg(test)]
mod tests {
    include!("matcher.test.rs");
}
