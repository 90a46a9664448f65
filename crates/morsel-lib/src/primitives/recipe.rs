use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipe categories in the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeKind {
    /// Food recipe
    Food,
    /// Cocktail recipe (always carries the "Alcohol" allergen tag)
    Cocktail,
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeKind::Food => write!(f, "food"),
            RecipeKind::Cocktail => write!(f, "cocktail"),
        }
    }
}

impl std::str::FromStr for RecipeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(RecipeKind::Food),
            "cocktail" => Ok(RecipeKind::Cocktail),
            _ => Err(format!("Invalid recipe kind: {}", s)),
        }
    }
}

/// Provenance of a recipe record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    /// Procedurally seeded catalogue entry
    Seed,
    /// Authored by the user
    User,
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeSource::Seed => write!(f, "seed"),
            RecipeSource::User => write!(f, "user"),
        }
    }
}
