//! Error types for the xfiles library.
//!
//! This module provides the error hierarchy for path normalization, the
//! backing store, and configuration, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an xfiles error.
///
/// # Examples
///
/// ```
/// use xfiles::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp/first".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the xfiles library.
#[derive(Debug, Error)]
pub enum Error {
    /// A `~user` prefix named a user with no resolvable home directory.
    #[error("user not found: {}", if user.is_empty() { "(current user)" } else { user.as_str() })]
    UserNotFound {
        /// The user name following the tilde (empty for the current user).
        user: String,
    },

    /// A path could not be used as given.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Reading or writing the backing file failed.
    #[error("store I/O error on {}: {source}", path.display())]
    StoreIo {
        /// The backing file (or its temporary sibling).
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error in {}: {source}", path.display())]
    Configuration {
        /// The configuration file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or environment variable that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error outside the backing store occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn store_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreIo {
            path: path.into(),
            source,
        }
    }
}
