//! Catalogue browsing: free-text query plus tag filters
//!
//! Linear scan over the store; the query is a case-insensitive substring
//! match against a haystack of name, tags, ingredients, and kind label.

use crate::morsel::store::Recipe;
use crate::primitives::RecipeKind;

/// Filters for a browse view
#[derive(Debug, Clone, Default)]
pub struct BrowseFilters {
    /// Case-insensitive substring query
    pub query: Option<String>,
    /// Keep only this recipe kind (None keeps both)
    pub kind: Option<RecipeKind>,
    /// Keep only recipes tagged with this mood
    pub mood: Option<String>,
    /// Keep only recipes carrying this allergen tag
    pub allergen: Option<String>,
}

impl BrowseFilters {
    pub fn admits(&self, recipe: &Recipe) -> bool {
        if self.kind.is_some_and(|k| k != recipe.kind) {
            return false;
        }
        if let Some(mood) = &self.mood {
            if !recipe.moods.iter().any(|m| m.eq_ignore_ascii_case(mood)) {
                return false;
            }
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
        match &self.query {
            None => true,
            Some(q) => {
                let q = q.trim().to_lowercase();
                q.is_empty() || haystack(recipe).contains(&q)
            }
        }
    }
}

fn haystack(recipe: &Recipe) -> String {
    [
        recipe.name.as_str(),
        &recipe.moods.join(" "),
        &recipe.allergens.join(" "),
        &recipe.ingredients,
        &recipe.kind.to_string(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Filter recipes preserving their input order
pub fn browse<'a>(
    recipes: impl IntoIterator<Item = &'a Recipe>,
    filters: &BrowseFilters,
) -> Vec<&'a Recipe> {
    recipes.into_iter().filter(|r| filters.admits(r)).collect()
}

#[cfg(test)]
mod tests {
    include!("search.test.rs");
}
