//! Environment variable handling for configuration overrides.
//!
//! This module provides support for XFILES_* environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Environment variable overriding the backing file location.
pub const STORAGE_ENV: &str = "XFILES_STORAGE";

/// Handles environment variable overrides for configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an empty value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // XFILES_STORAGE
        if let Some(storage) = env::var_os(STORAGE_ENV) {
            if storage.is_empty() {
                return Err(Error::Validation {
                    field: STORAGE_ENV.into(),
                    message: "must not be empty".into(),
                });
            }
            config.storage = Some(PathBuf::from(storage));
        }

        Ok(())
    }
}
