//! Error taxonomy
//!
//! Only `ConfigError` is fatal to the process. Everything else ends the
//! current request with a message and a clean exit.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set. Add it to settings.json or export it in the environment")]
    MissingCredential(&'static str),

    #[error("{0} is an unsupported operating system")]
    UnsupportedPlatform(String),

    #[error("Failed to read settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Steam request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch Steam games. Status code: {0}")]
    Status(u16),
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: std::process::ExitStatus },
}

/// Why a resolution request ended without a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    /// "did you mean" answered with a negative
    Declined,
    /// explicit cancel at the numbered menu
    Cancelled,
    /// out-of-range or non-numeric selection
    InvalidChoice(String),
}

impl std::fmt::Display for CancelReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CancelReason::Declined | CancelReason::Cancelled => write!(f, "Launch cancelled."),
            CancelReason::InvalidChoice(_) => write!(f, "Invalid choice. Cancelling launch."),
        }
    }
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No matches found for '{query}'.")]
    NotFound { query: String, known: Vec<String> },

    #[error("{0}")]
    Cancelled(CancelReason),

    #[error("Failed to read answer: {0}")]
    Prompt(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Game '{title}' not found in the list of known games.")]
    NotFound { title: String, known: Vec<String> },

    #[error(transparent)]
    Launch(#[from] LaunchError),
}
