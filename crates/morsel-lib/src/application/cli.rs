use crate::primitives::{AgeAnswer, ConfigError, RecipeKind, Units};
use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// morsel CLI - recipe catalogue and meal planning
#[derive(Debug, Clone, Parser)]
#[command(name = "morsel")]
#[command(about = "A pocket recipe book: browse, match what's in your pantry, plan the shop")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// morsel commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        let cli = Cli::parse();
        Ok(Self {
            app_config: cli.config,
            command: cli.command,
        })
    }
}

/// Recipe kind selection for list/find style commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Food and cocktails
    All,
    /// Food recipes only
    Food,
    /// Cocktail recipes only
    Cocktail,
}

impl KindArg {
    /// Narrow to a concrete kind; `All` places no constraint
    pub fn to_kind(self) -> Option<RecipeKind> {
        match self {
            KindArg::All => None,
            KindArg::Food => Some(RecipeKind::Food),
            KindArg::Cocktail => Some(RecipeKind::Cocktail),
        }
    }
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KindArg::All => write!(f, "all"),
            KindArg::Food => write!(f, "food"),
            KindArg::Cocktail => write!(f, "cocktail"),
        }
    }
}

/// Available morsel commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Browse the catalogue with optional search and filters
    List {
        /// Free-text search over names, tags, and ingredients
        query: Option<String>,

        /// Restrict to food or cocktails
        #[arg(long, value_enum, default_value_t = KindArg::All)]
        kind: KindArg,

        /// Keep only recipes tagged with this mood
        #[arg(long)]
        mood: Option<String>,

        /// Keep only recipes carrying this allergen tag
        #[arg(long)]
        allergen: Option<String>,

        /// Maximum entries to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Show one recipe in full
    Show {
        /// Recipe id (as printed by list/find)
        id: String,
    },

    /// Save a recipe of your own
    Add {
        /// Recipe name
        #[arg(long)]
        name: Option<String>,

        /// food or cocktail
        #[arg(long, value_enum, default_value_t = KindArg::Food)]
        kind: KindArg,

        /// Difficulty 1-5
        #[arg(long)]
        level: Option<u8>,

        /// Comma-separated mood tags (max 3)
        #[arg(long)]
        moods: Option<String>,

        /// Comma-separated allergen tags
        #[arg(long)]
        allergens: Option<String>,

        /// Serving count
        #[arg(long)]
        serves: Option<String>,

        /// Estimated time, e.g. "35m"
        #[arg(long)]
        time: Option<String>,

        /// Story behind the recipe
        #[arg(long)]
        history: Option<String>,

        /// One ingredient line; repeat for each line
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,

        /// Method text (newlines allowed)
        #[arg(long)]
        method: Option<String>,

        /// Variation notes
        #[arg(long)]
        variations: Option<String>,
    },

    /// Manage the pantry (ingredients you have on hand)
    Pantry {
        #[command(subcommand)]
        action: PantryAction,
    },

    /// Rank recipes you can make from the pantry
    Find {
        /// Max percentage of a recipe's ingredients you may be missing
        #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(0..=100))]
        tolerance: u8,

        /// Restrict to food or cocktails
        #[arg(long, value_enum, default_value_t = KindArg::All)]
        kind: KindArg,

        /// Keep only recipes carrying this allergen tag
        #[arg(long)]
        allergen: Option<String>,
    },

    /// Toggle a recipe in your favourites
    Fav {
        /// Recipe id
        id: String,
    },

    /// Show your book: favourites and your own recipes
    Book,

    /// Rate a recipe
    Rate {
        /// Recipe id
        id: String,

        /// Stars 1-5
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        stars: u8,
    },

    /// Comment on a recipe
    Comment {
        /// Recipe id
        id: String,

        /// Comment text
        text: Vec<String>,
    },

    /// Manage the shopping list
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },

    /// Rebuild the seeded catalogue (your own recipes are kept)
    Seed {
        /// Number of food recipes
        #[arg(long)]
        food: Option<usize>,

        /// Number of cocktail recipes
        #[arg(long)]
        cocktails: Option<usize>,
    },

    /// Show or set the measurement system
    Units {
        /// metric or imperial; omit to show the current setting
        #[arg(value_enum)]
        value: Option<Units>,
    },

    /// Show or set the cocktail age gate answer
    Age {
        /// yes or no; omit to show the current answer
        #[arg(value_enum)]
        answer: Option<AgeAnswer>,
    },

    /// Show version information
    Version,
}

/// Pantry subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PantryAction {
    /// Add ingredients
    Add {
        /// Ingredient names
        items: Vec<String>,
    },

    /// Remove ingredients
    Remove {
        /// Ingredient names
        items: Vec<String>,
    },

    /// Empty the pantry
    Clear,

    /// List pantry contents
    List,
}

/// Shopping list subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ShopAction {
    /// Add an item to the top of the list
    Add {
        /// Item text
        text: Vec<String>,
    },

    /// Toggle an item's done flag
    Done {
        /// 1-based position as printed by `shop list`
        index: usize,
    },

    /// Remove an item
    Remove {
        /// 1-based position as printed by `shop list`
        index: usize,
    },

    /// Remove every item
    Clear,

    /// Print the list
    List,

    /// Push a recipe's ingredient lines onto the list
    Ingredients {
        /// Recipe id
        id: String,
    },
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
