//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::store::StoreConfig;

/// Builds the effective configuration from defaults, the user file, the
/// environment, and programmatic overrides.
///
/// # Examples
///
/// ```
/// use xfiles::config::ConfigBuilder;
///
/// let store_config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_storage("/tmp/scratch/xfiles")
///     .build()
///     .unwrap();
///
/// assert_eq!(store_config.path.to_str().unwrap(), "/tmp/scratch/xfiles");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Config,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the user configuration from `path` instead of the default location.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Set the backing file location, overriding every other source.
    #[must_use]
    pub fn with_storage(mut self, path: impl AsRef<Path>) -> Self {
        self.overrides.storage = Some(path.as_ref().to_path_buf());
        self
    }

    /// Merge the sources and resolve the store location.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be parsed, an
    /// environment value is invalid, or the resolved location is relative.
    pub fn build(self) -> Result<StoreConfig> {
        let mut config = Config::default();

        if !self.skip_files {
            let path = self.config_file.or_else(ConfigLoader::user_config_path);
            if let Some(path) = path {
                if let Some(file_config) = ConfigLoader::load_optional(&path)? {
                    log::debug!("loaded configuration from {}", path.display());
                    config.merge(file_config);
                }
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        config.merge(self.overrides);

        let storage = config.storage.unwrap_or_else(StoreConfig::default_path);
        if !storage.is_absolute() {
            return Err(Error::Validation {
                field: "storage".into(),
                message: format!("must be an absolute path, got {}", storage.display()),
            });
        }
        Ok(StoreConfig::new(storage))
    }
}
