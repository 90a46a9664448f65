//! Procedural catalogue seeding
//!
//! Generates the built-in recipe catalogue from small word pools using
//! index arithmetic only, no RNG, so the same counts always produce the
//! same catalogue. Every record goes through draft normalization, keeping
//! the invariants (mood cap, alcohol tag, level clamp) in one place.

use crate::morsel::store::{Recipe, RecipeDraft, guess_time};
use crate::morsel::tokenizer::StopwordSet;
use crate::primitives::{RecipeKind, RecipeSource};

/// Catalogue size on first run and bare reseed
pub const DEFAULT_FOOD_COUNT: usize = 1500;
pub const DEFAULT_COCKTAIL_COUNT: usize = 300;

/// A stored catalogue smaller than this is treated as absent and reseeded
pub const SEED_FLOOR: usize = 50;

const CUISINES: &[&str] = &[
    "Rustic", "Country", "Homestyle", "Backyard", "Campfire", "Garden", "Pantry", "Coastal",
];
const PROTEINS: &[&str] = &[
    "Chicken", "Beef", "Pork", "Lamb", "Tofu", "Beans", "Fish", "Mushroom",
];
const MAINS: &[&str] = &[
    "Stew", "Stir-fry", "Skillet", "Bake", "Pasta", "Curry", "Salad", "Soup", "Tacos", "Bowl",
];
const SIDES: &[&str] = &[
    "Potatoes", "Rice", "Greens", "Beans", "Corn", "Noodles", "Slaw", "Bread",
];
const SAUCES: &[&str] = &[
    "Garlic Butter",
    "Smoky Tomato",
    "Herb Lemon",
    "Pepper Gravy",
    "Chilli Lime",
    "Miso Ginger",
    "Creamy Mustard",
    "Honey Soy",
];
const MOODS: &[&str] = &[
    "Comfort", "Quick", "Healthy", "Budget", "Spicy", "Slow cook", "Date night", "BBQ", "Fresh",
];
const ALLERGEN_POOL: &[&str] = &[
    "Gluten", "Dairy", "Eggs", "Peanuts", "Tree nuts", "Soy", "Fish", "Shellfish", "Sesame",
];
const BASE_INGREDIENTS: &[&str] = &[
    "1 onion",
    "2 cloves garlic",
    "1 tbsp oil",
    "1 tsp salt",
    "1 tsp pepper",
    "1 tsp paprika",
    "250 ml stock",
];

const SPIRITS: &[&str] = &["Vodka", "Gin", "Rum", "Tequila", "Whiskey", "Bourbon"];
const STYLES: &[&str] = &[
    "Sour", "Highball", "Fizz", "Spritz", "Mule", "Old Fashioned", "Punch",
];
const COCKTAIL_MOODS: &[&str] = &["Fresh", "Date night", "Party", "Classic", "Tropical"];

/// Build a fresh seeded catalogue: food entries first, then cocktails
pub fn build_catalogue(
    food_count: usize,
    cocktail_count: usize,
    stopwords: &StopwordSet,
) -> Vec<Recipe> {
    let mut out = Vec::with_capacity(food_count + cocktail_count);

    for i in 0..food_count {
        out.push(food_recipe(i, stopwords));
    }
    for i in 0..cocktail_count {
        out.push(cocktail_recipe(i, stopwords));
    }

    out
}

fn food_recipe(i: usize, stopwords: &StopwordSet) -> Recipe {
    let protein = PROTEINS[i % PROTEINS.len()];
    let dish = MAINS[(i * 7) % MAINS.len()];
    let vibe = CUISINES[(i * 3) % CUISINES.len()];
    let side = SIDES[(i * 5) % SIDES.len()];
    let sauce = SAUCES[(i * 11) % SAUCES.len()];

    let level = (i % 5) as u8 + 1;

    let mut ingredients = vec![format!("300 g {}", protein.to_lowercase())];
    ingredients.extend(BASE_INGREDIENTS.iter().map(|s| (*s).to_string()));
    ingredients.push(format!("1 cup {}", side.to_lowercase()));
    ingredients.push(format!("2 tbsp {}", sauce.to_lowercase()));
    ingredients.push("1 tbsp vinegar or lemon".to_string());

    let method = [
        "1) Heat oil in a pan. Cook onion + garlic until soft.".to_string(),
        format!(
            "2) Add {}. Season with salt, pepper, paprika.",
            protein.to_lowercase()
        ),
        "3) Add stock, simmer until tender.".to_string(),
        format!("4) Stir in {} and taste-adjust.", sauce.to_lowercase()),
        format!("5) Serve with {}.", side.to_lowercase()),
    ];

    let variations = [
        "- Make it hotter: add chilli flakes or fresh chilli.".to_string(),
        format!("- Cheaper: swap {} for beans.", protein.to_lowercase()),
        "- Faster: use pre-cooked protein and reduce simmer time.".to_string(),
    ];

    let draft = RecipeDraft {
        id: format!("seed_food_{i}"),
        kind: Some(RecipeKind::Food),
        name: Some(format!("{vibe} {protein} {dish}")),
        moods: Some(pick3(MOODS, i)),
        level: Some(level),
        allergens: Some(pick_allergens(ALLERGEN_POOL, i, 0.18)),
        serves: Some(((i % 4) + 2).to_string()),
        time: Some(guess_time(level).to_string()),
        history: Some(format!(
            "Built from a {} kitchen habit: make a solid meal with what's around, keep it honest, feed people well.",
            vibe.to_lowercase()
        )),
        ingredients: Some(ingredients.join("\n")),
        method: Some(method.join("\n")),
        variations: Some(variations.join("\n")),
        source: Some(RecipeSource::Seed),
    };

    draft.normalize(stopwords)
}

fn cocktail_recipe(i: usize, stopwords: &StopwordSet) -> Recipe {
    let spirit = SPIRITS[i % SPIRITS.len()];
    let style = STYLES[(i * 5) % STYLES.len()];
    let level = (i % 3) as u8 + 1;

    let moods = vec![
        COCKTAIL_MOODS[i % COCKTAIL_MOODS.len()].to_string(),
        COCKTAIL_MOODS[(i + 2) % COCKTAIL_MOODS.len()].to_string(),
    ];

    let ingredients = [
        format!("60 ml {}", spirit.to_lowercase()),
        "30 ml citrus juice".to_string(),
        "15 ml syrup".to_string(),
        "Ice".to_string(),
        "Top with soda (optional)".to_string(),
    ];

    let method = [
        "1) Add spirit, citrus, and syrup to a shaker with ice.",
        "2) Shake hard for 10-12 seconds.",
        "3) Strain into a glass with fresh ice.",
        "4) Optional: top with soda. Garnish if you feel fancy.",
    ];

    let variations = [
        "- Less sweet: halve the syrup.",
        "- Stronger: add +15 ml spirit.",
        "- Softer: top with soda or tonic.",
    ];

    let draft = RecipeDraft {
        id: format!("seed_cocktail_{i}"),
        kind: Some(RecipeKind::Cocktail),
        name: Some(format!("{spirit} {style}")),
        moods: Some(moods),
        level: Some(level),
        allergens: Some(vec!["Alcohol".to_string()]),
        serves: Some("1".to_string()),
        time: Some("5m".to_string()),
        history: Some(format!(
            "A simple {} built around {}. Honest, quick, repeatable.",
            style.to_lowercase(),
            spirit.to_lowercase()
        )),
        ingredients: Some(ingredients.join("\n")),
        method: Some(method.join("\n")),
        variations: Some(variations.join("\n")),
        source: Some(RecipeSource::Seed),
    };

    draft.normalize(stopwords)
}

/// Three mood tags spread across the pool (duplicates collapse in
/// normalization)
fn pick3(pool: &[&str], i: usize) -> Vec<String> {
    vec![
        pool[i % pool.len()].to_string(),
        pool[(i * 3 + 2) % pool.len()].to_string(),
        pool[(i * 7 + 5) % pool.len()].to_string(),
    ]
}

/// Sparse allergen assignment: most recipes carry none, a few carry one or
/// two, decided by modular arithmetic so reseeds are reproducible
fn pick_allergens(pool: &[&str], i: usize, chance: f64) -> Vec<String> {
    let flag = ((i * 37) % 100) as f64 / 100.0;
    if flag > chance {
        return Vec::new();
    }
    let first = pool[i % pool.len()].to_string();
    let flag2 = ((i * 91) % 100) as f64 / 100.0;
    if flag2 < chance / 3.0 {
        let second = pool[(i * 5 + 1) % pool.len()].to_string();
        return vec![first, second];
    }
    vec![first]
}

#[cfg(test)]
mod tests {
    include!("seed.test.rs");
}
