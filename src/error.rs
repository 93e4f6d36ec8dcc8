//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `ddply` application. It uses the `thiserror` library to create a single
//! `Error` enum that covers all anticipated failure modes, providing clear
//! and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures.
//!
//! Every failure aborts the operation in progress and bubbles up to `main`;
//! there is no retry and no rollback of work already performed. The binary
//! maps each top-level failure to a distinct exit code via
//! [`Error::exit_code`]:
//!
//! | Failure | Exit code |
//! |---------|-----------|
//! | Missing source/destination argument | 1 |
//! | Source is not a valid directory | 2 |
//! | Explicitly specified config file not found | 4 |
//! | Config file present but fails to parse | 6 |
//! | Any other I/O, resolution, or removal failure | 1 |

use thiserror::Error;

/// Main error type for ddply operations
#[derive(Error, Debug)]
pub enum Error {
    /// The source and/or destination arguments were not supplied on the
    /// command line.
    #[error("Source and/or destination not specified")]
    InvalidArguments,

    /// The source argument does not point to an existing directory.
    #[error("Source argument does not point to valid directory: {path}")]
    InvalidSource { path: String },

    /// A config file was explicitly specified (flag or environment) but no
    /// regular file exists at that location. There is no fallback to the
    /// default config in this case.
    #[error("Specified config file not found: {path}")]
    ConfigNotFound { path: String },

    /// The configuration file exists but is not valid YAML.
    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// A shared entry's source path could not be resolved to an absolute
    /// path. Aborts the remaining entries.
    #[error("Failed to resolve shared path '{path}': {message}")]
    Resolution { path: String, message: String },

    /// An existing entry at a shared destination path could not be removed
    /// before linking. Aborts the remaining entries.
    #[error("Failed to remove existing destination entry '{path}': {source}")]
    Removal {
        path: String,
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`. Covers the
    /// open/create/read/write/stat/chmod/chown failures during copying and
    /// symlink creation failures during linking.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The process exit code for this error when it reaches the top level.
    ///
    /// Codes 2, 4 and 6 identify the three startup failures the user can
    /// act on directly; everything else is a generic failure (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidSource { .. } => 2,
            Error::ConfigNotFound { .. } => 4,
            Error::ConfigParse(_) => 6,
            Error::InvalidArguments
            | Error::Resolution { .. }
            | Error::Removal { .. }
            | Error::Io(_) => 1,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
