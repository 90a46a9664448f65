//! # morsel Library
//!
//! Recipe catalogue and meal-planning library.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`morsel`] - Domain logic: tokenizer, matcher, store, seeding
//! - [`storage`] - Persisted key→JSON state
//! - [`display`] - Terminal output styling
//! - [`logger`] - Structured logging
//! - [`application`] - CLI interface, sessions, and command handlers
//!
//! ## Quick Start
//!
//! ```no_run
//! // Initialize and run morsel
//! morsel_lib::main().unwrap();
//! ```

pub mod application;
pub mod display;
pub mod logger;
pub mod morsel;
pub mod primitives;
pub mod storage;

// Re-export commonly used types for convenience
pub use application::{AppConfig, AppState, Cli, Commands, execute_command};
pub use logger::Logger;
pub use morsel::{BrowseFilters, FinderFilters, HaveSet, Recipe, RecipeStore, StopwordSet};
pub use primitives::{AgeAnswer, ColorChoice, ConfigError, LoggerError, RecipeKind, Units};
pub use storage::{FileStorage, MemoryStorage, Storage, StoreKey};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub fn main() -> Result<()> {
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    // Load CLI configuration
    let config = CliConfig::load()?;

    // Initialize logging before any command work
    Logger::init(config.app_config.to_logger_config())?;

    // Execute the command
    execute_command(config)
}
