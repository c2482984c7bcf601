//! Error types for napier.
//!
//! Each concern owns a `thiserror` enum; all of them convert into
//! [`AppError`] so `?` composes from the shell down.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned to `main`
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failures
//!   - [`StateError`] - saved-state read/parse/write failures
//!   - [`ExportError`] - SVG export failures
//!   - `std::io::Error` - terminal failures
//!
//! # Recovery
//!
//! Config, logging and terminal errors are fatal. State errors never are:
//! an unreadable or malformed state file is logged and treated as "no
//! previous state". The bone core itself has no failure modes.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Saved state could not be read or written.
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Bone export failed.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures around the persisted entered number.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state file exists but could not be read.
    #[error("Failed to read state file at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state file is not valid JSON for [`SavedState`](crate::state::SavedState).
    #[error("Malformed state file at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The state file could not be written.
    #[error("Failed to write state file at {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state could not be serialized.
    #[error("Failed to serialize state: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Failures writing bone SVGs to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output directory could not be created.
    #[error("Failed to create export directory {path:?}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bone file could not be written.
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scale must be a positive finite number.
    #[error("Invalid scale {0}: must be positive and finite")]
    InvalidScale(f64),
}
