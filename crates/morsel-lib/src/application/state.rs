//! The application state object
//!
//! Owns everything the presentation layer renders: the recipe store,
//! pantry, favourites, ratings, comments, shopping list, and settings.
//! Constructed from storage at the start of each command, written back
//! key-by-key after every mutation. The matcher and tokenizer stay pure;
//! nothing in the domain reads globals.

use crate::morsel::matcher::HaveSet;
use crate::morsel::ratings::{CommentLog, RatingLog};
use crate::morsel::seed::{DEFAULT_COCKTAIL_COUNT, DEFAULT_FOOD_COUNT, SEED_FLOOR, build_catalogue};
use crate::morsel::store::{DraftError, Recipe, RecipeDraft, RecipeStore, user_recipe_id};
use crate::morsel::tokenizer::StopwordSet;
use crate::primitives::{AgeAnswer, RecipeSource, Units};
use crate::storage::{Storage, StorageError, StoreKey, load_or_default, save};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// One shopping list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub text: String,
    pub done: bool,
}

/// Full application state, loaded per command
#[derive(Debug)]
pub struct AppState {
    pub units: Units,
    pub age: Option<AgeAnswer>,
    pub store: RecipeStore,
    pub favs: BTreeSet<String>,
    pub comments: BTreeMap<String, CommentLog>,
    pub ratings: BTreeMap<String, RatingLog>,
    pub shop: Vec<ShopItem>,
    pub pantry: HaveSet,
    stopwords: StopwordSet,
}

impl AppState {
    /// Load state from storage, seeding the catalogue when it is absent or
    /// implausibly small
    pub fn load(storage: &dyn Storage) -> Result<Self, StorageError> {
        let stopwords = StopwordSet::default();

        let mut catalogue: Vec<Recipe> = load_or_default(storage, StoreKey::Recipes);
        let mine: Vec<Recipe> = load_or_default(storage, StoreKey::MyRecipes);

        let mut freshly_seeded = false;
        if catalogue.len() < SEED_FLOOR {
            info!(
                found = catalogue.len(),
                "catalogue below seed floor, rebuilding"
            );
            catalogue = build_catalogue(DEFAULT_FOOD_COUNT, DEFAULT_COCKTAIL_COUNT, &stopwords);
            freshly_seeded = true;
        }

        let state = Self {
            units: load_or_default(storage, StoreKey::Units),
            age: load_or_default(storage, StoreKey::AgeOk),
            store: RecipeStore::new(catalogue, mine, &stopwords),
            favs: load_or_default(storage, StoreKey::Favs),
            comments: load_or_default(storage, StoreKey::Comments),
            ratings: load_or_default(storage, StoreKey::Ratings),
            shop: load_or_default(storage, StoreKey::Shop),
            pantry: load_or_default(storage, StoreKey::Finder),
            stopwords,
        };

        if freshly_seeded {
            state.save_catalogue(storage)?;
        }

        Ok(state)
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Replace the seeded catalogue; user recipes and every other key are
    /// untouched
    pub fn reseed(&mut self, food: usize, cocktails: usize) {
        self.store
            .reseed(build_catalogue(food, cocktails, &self.stopwords));
    }

    /// Validate and ingest a user-authored recipe; returns its id
    pub fn add_user_recipe(&mut self, mut draft: RecipeDraft) -> Result<String, DraftError> {
        draft.validate_user_required()?;
        draft.source = Some(RecipeSource::User);
        if draft.id.trim().is_empty() {
            draft.id = user_recipe_id();
        }

        // Ids must stay unique across the combined catalogue.
        let mut id = draft.id.clone();
        let mut bump = 1;
        while self.store.get(&id).is_some() {
            id = format!("{}_{bump}", draft.id);
            bump += 1;
        }
        draft.id = id.clone();

        self.store.add_mine(draft.normalize(&self.stopwords));
        Ok(id)
    }

    /// Toggle a favourite; returns true when the recipe is now a favourite
    pub fn toggle_fav(&mut self, id: &str) -> bool {
        if self.favs.remove(id) {
            false
        } else {
            self.favs.insert(id.to_string());
            true
        }
    }

    pub fn average_rating(&self, id: &str) -> Option<f64> {
        self.ratings.get(id).and_then(RatingLog::average)
    }

    pub fn ratings_count(&self, id: &str) -> usize {
        self.ratings.get(id).map_or(0, RatingLog::len)
    }

    pub fn cocktails_unlocked(&self) -> bool {
        self.age == Some(AgeAnswer::Yes)
    }

    // Per-key persistence: every mutating command saves exactly the keys it
    // touched, immediately.

    pub fn save_units(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        save(storage, StoreKey::Units, &self.units)
    }

    pub fn save_age(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        save(storage, StoreKey::AgeOk, &self.age)
    }

    pub fn save_catalogue(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        save(storage, StoreKey::Recipes, &self.store.catalogue())
    }

    pub fn save_my_recipes(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        save(storage, StoreKey::MyRecipes, &self.store.mine())
    }

    pub fn save_favs(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        save(storage, StoreKey::Favs, &self.favs)
    }

    pub fn save_comments(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        save(storage, StoreKey::Comments, &self.comments)
    }

    pub fn save_ratings(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        save(storage, StoreKey::Ratings, &self.ratings)
    }

    pub fn save_shop(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        save(storage, StoreKey::Shop, &self.shop)
    }

    pub fn save_pantry(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        save(storage, StoreKey::Finder, &self.pantry)
    }
}

#[cfg(test)]
mod tests {
    include!("state.test.rs");
}
