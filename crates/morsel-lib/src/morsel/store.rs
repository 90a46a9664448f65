//! Recipe records, ingestion normalization, and the combined store
//!
//! Persisted recipe records are duck-shaped: user-authored and older seeded
//! entries may be missing fields. Normalization runs once at ingestion and
//! produces a fully-populated [`Recipe`], so downstream code (matcher,
//! search, rendering) never checks for field presence.

use crate::morsel::tokenizer::{StopwordSet, tokenize};
use crate::primitives::{RecipeKind, RecipeSource};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Mood tags kept per recipe
pub const MAX_MOODS: usize = 3;

/// Difficulty bounds and default
const LEVEL_MIN: u8 = 1;
const LEVEL_MAX: u8 = 5;
const LEVEL_DEFAULT: u8 = 2;

/// The allergen tag every cocktail carries
pub const ALCOHOL_TAG: &str = "Alcohol";

/// Validation failures for user-authored drafts
///
/// These surface as user-visible messages and block saving; they are never
/// fatal to the application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("a recipe needs a name")]
    MissingName,

    #[error("a recipe needs an ingredients list")]
    MissingIngredients,

    #[error("a recipe needs a method")]
    MissingMethod,
}

/// A fully-normalized recipe record
///
/// Every field is populated; invariants (mood cap, level clamp, cocktail
/// alcohol tag) hold by construction. The token set is derived from the
/// ingredients text and is never persisted: it is recomputed at ingestion
/// and whenever the text changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub kind: RecipeKind,
    pub name: String,
    pub moods: Vec<String>,
    pub level: u8,
    pub allergens: Vec<String>,
    pub serves: String,
    pub time: String,
    pub history: String,
    pub ingredients: String,
    pub method: String,
    pub variations: String,
    pub source: RecipeSource,

    #[serde(skip)]
    tokens: BTreeSet<String>,
}

impl Recipe {
    /// Normalized ingredient token set for matching
    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }

    /// Replace the ingredients text, recomputing the token set
    pub fn set_ingredients(&mut self, text: &str, stopwords: &StopwordSet) {
        self.ingredients = text.to_string();
        self.retokenize(stopwords);
    }

    pub(crate) fn retokenize(&mut self, stopwords: &StopwordSet) {
        self.tokens = tokenize(&self.ingredients, stopwords);
    }
}

/// Duck-shaped ingestion record: only the id is required
///
/// This is the shape user input and persisted state arrive in;
/// [`RecipeDraft::normalize`] turns it into a [`Recipe`] with documented
/// defaults for every missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub id: String,
    #[serde(default)]
    pub kind: Option<RecipeKind>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub moods: Option<Vec<String>>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub allergens: Option<Vec<String>>,
    #[serde(default)]
    pub serves: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub variations: Option<String>,
    #[serde(default)]
    pub source: Option<RecipeSource>,
}

impl RecipeDraft {
    /// Check the fields a user-authored recipe must carry
    pub fn validate_user_required(&self) -> Result<(), DraftError> {
        if self.name.as_deref().is_none_or(|s| s.trim().is_empty()) {
            return Err(DraftError::MissingName);
        }
        if self
            .ingredients
            .as_deref()
            .is_none_or(|s| s.trim().is_empty())
        {
            return Err(DraftError::MissingIngredients);
        }
        if self.method.as_deref().is_none_or(|s| s.trim().is_empty()) {
            return Err(DraftError::MissingMethod);
        }
        Ok(())
    }

    /// Produce a fully-populated recipe with documented defaults
    ///
    /// level -> 2 clamped to [1,5]; serves -> "2" food / "1" cocktail;
    /// time -> estimated from level; moods/allergens -> empty, trimmed,
    /// deduplicated; cocktails gain the "Alcohol" tag exactly once.
    pub fn normalize(self, stopwords: &StopwordSet) -> Recipe {
        let kind = self.kind.unwrap_or(RecipeKind::Food);
        let level = self.level.unwrap_or(LEVEL_DEFAULT).clamp(LEVEL_MIN, LEVEL_MAX);

        let moods = {
            let mut tags = dedup_tags(self.moods.unwrap_or_default());
            tags.truncate(MAX_MOODS);
            tags
        };

        let mut allergens = dedup_tags(self.allergens.unwrap_or_default());
        if kind == RecipeKind::Cocktail && !allergens.iter().any(|a| a == ALCOHOL_TAG) {
            allergens.push(ALCOHOL_TAG.to_string());
        }

        let serves = self
            .serves
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default_serves(kind).to_string());

        let time = self
            .time
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| guess_time(level).to_string());

        let mut recipe = Recipe {
            id: self.id,
            kind,
            name: self
                .name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Untitled".to_string()),
            moods,
            level,
            allergens,
            serves,
            time,
            history: self.history.unwrap_or_default().trim().to_string(),
            ingredients: self.ingredients.unwrap_or_default().trim().to_string(),
            method: self.method.unwrap_or_default().trim().to_string(),
            variations: self.variations.unwrap_or_default().trim().to_string(),
            source: self.source.unwrap_or(RecipeSource::Seed),
            tokens: BTreeSet::new(),
        };

        recipe.retokenize(stopwords);
        recipe
    }
}

/// Trim a tag and collapse internal whitespace
pub fn clean_tag(raw: &str) -> String {
    raw.trim()
        .trim_matches(',')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a comma-delimited tag string, cleaning and capping the result
pub fn parse_comma_tags(raw: &str, max: usize) -> Vec<String> {
    let mut tags = dedup_tags(raw.split(',').map(str::to_string).collect());
    tags.truncate(max);
    tags
}

/// Clean tags, drop empties, deduplicate preserving insertion order
fn dedup_tags(raw: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    raw.into_iter()
        .map(|t| clean_tag(&t))
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

fn default_serves(kind: RecipeKind) -> &'static str {
    match kind {
        RecipeKind::Food => "2",
        RecipeKind::Cocktail => "1",
    }
}

/// Estimated time for a recipe that did not state one
pub fn guess_time(level: u8) -> &'static str {
    match level {
        0 | 1 => "10m",
        2 => "20m",
        3 => "35m",
        4 => "55m",
        _ => "90m",
    }
}

/// Fresh id for a user-authored recipe
pub fn user_recipe_id() -> String {
    format!("my_{}", Utc::now().timestamp_millis())
}

/// The combined recipe collection: user-authored entries first
///
/// `mine` holds user recipes newest-first; `catalogue` holds the seeded
/// collection in catalogue order. Reseeding replaces only the catalogue.
/// Every recipe handed out carries a token set consistent with its current
/// ingredients text.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    mine: Vec<Recipe>,
    catalogue: Vec<Recipe>,
}

impl RecipeStore {
    /// Build a store from persisted records, recomputing token sets
    pub fn new(catalogue: Vec<Recipe>, mine: Vec<Recipe>, stopwords: &StopwordSet) -> Self {
        let mut store = Self { mine, catalogue };
        for recipe in store.mine.iter_mut().chain(store.catalogue.iter_mut()) {
            recipe.retokenize(stopwords);
        }
        store
    }

    /// All recipes: user-authored first (newest first), then the catalogue
    pub fn all(&self) -> impl Iterator<Item = &Recipe> {
        self.mine.iter().chain(self.catalogue.iter())
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.all().find(|r| r.id == id)
    }

    /// Prepend a user-authored recipe
    pub fn add_mine(&mut self, recipe: Recipe) {
        self.mine.insert(0, recipe);
    }

    /// Replace the seeded catalogue, preserving user recipes
    pub fn reseed(&mut self, catalogue: Vec<Recipe>) {
        self.catalogue = catalogue;
    }

    pub fn mine(&self) -> &[Recipe] {
        &self.mine
    }

    pub fn catalogue(&self) -> &[Recipe] {
        &self.catalogue
    }

    pub fn len(&self) -> usize {
        self.mine.len() + self.catalogue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mine.is_empty() && self.catalogue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    include!("store.test.rs");
}
