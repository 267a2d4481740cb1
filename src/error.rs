use thiserror::Error;

use crate::workflow::AppState;

/// Errors that abort a recipe-finder run
///
/// User-facing failures such as "no recipe matched" are not errors at this
/// level; the workflow reports them through its `Error` state and finishes
/// normally.
#[derive(Error, Debug)]
pub enum FinderError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// No API key in the configuration or the environment
    #[error("No API key present - set api.api_key in config.toml or FOOD2FORK_API_KEY")]
    MissingApiKey,

    /// Reading a dictionary or the console failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The dictionary file is not valid JSON
    #[error("Invalid dictionary: {0}")]
    DictionaryFormat(#[from] serde_json::Error),

    /// The dictionary file held no words
    #[error("Dictionary {0} contains no words")]
    EmptyDictionary(String),

    /// The console reached end of input while a prompt was waiting
    #[error("Input closed while waiting for a response")]
    InputClosed,

    /// A numeric state code outside the known set
    #[error("Invalid workflow state code {0}")]
    UnknownState(u8),

    /// A state that has no handler was dispatched
    #[error("Workflow state {0:?} has no handler")]
    UnhandledState(AppState),
}
