//! Recipe finder
//!
//! Collects ingredients from the user, spell-checks them, asks the
//! Food2Fork API for the best matching recipe and reports which of its
//! ingredients were not supplied.
//!
//! The [`Workflow`] state machine is generic over its collaborators
//! ([`Console`], [`SpellChecker`], [`RecipeApi`]) so a run can be driven
//! without a terminal or network:
//!
//! ```no_run
//! use recipe_finder::{
//!     AppConfig, EnglishDictionary, Food2ForkClient, RetryPolicy, StdConsole, Workflow,
//! };
//! use std::path::Path;
//!
//! # fn main() -> Result<(), recipe_finder::FinderError> {
//! let config = AppConfig::load()?;
//! let dictionary = EnglishDictionary::load(Path::new(&config.dictionary.path))?;
//! let client = Food2ForkClient::new(&config.api, "my-api-key".to_string())?;
//! let mut workflow = Workflow::new(
//!     StdConsole,
//!     dictionary,
//!     client,
//!     RetryPolicy::from_config(&config.retry),
//! );
//! workflow.run()?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod retry;
pub mod spellcheck;
pub mod suggestions;
pub mod workflow;

pub use api::{ApiResponse, Food2ForkClient, RecipeApi};
pub use config::AppConfig;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::FinderError;
pub use model::{RecipeResult, SortPreference};
pub use retry::{RetryBudget, RetryOutcome, RetryPolicy};
pub use spellcheck::{EnglishDictionary, SpellCheck, SpellChecker};
pub use workflow::{AppState, Workflow};

use log::info;
use std::path::Path;

/// Run the interactive workflow on stdin/stdout with the given configuration
pub fn run_with_config(config: &AppConfig) -> Result<(), FinderError> {
    let api_key = config.api_key().ok_or(FinderError::MissingApiKey)?;

    let dictionary = EnglishDictionary::load(Path::new(&config.dictionary.path))?
        .with_suggestion_limits(config.dictionary.max_suggestions, config.dictionary.cutoff);
    let client = Food2ForkClient::new(&config.api, api_key)?;
    let retry = RetryPolicy::from_config(&config.retry);

    info!(
        "Starting with {} attempts per API call, {}ms apart",
        retry.max_attempts(),
        retry.delay().as_millis()
    );
    let mut workflow = Workflow::new(StdConsole, dictionary, client, retry);
    workflow.run()
}
