//! Configuration file discovery and loading.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Environment variable overriding the user configuration file path.
pub const CONFIG_FILE_ENV: &str = "XFILES_CONFIG";

/// Loads the user configuration file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// The user configuration file: `$XFILES_CONFIG` if set, otherwise
    /// `~/.xfiles/config.yaml`. `None` if neither can be determined.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_FILE_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        home::home_dir().map(|home| home.join(".xfiles").join("config.yaml"))
    }

    /// Load `path` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<Config>> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(path, &contents).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: format!("failed to read configuration file: {e}"),
            }),
        }
    }

    fn parse(path: &Path, contents: &str) -> Result<Config> {
        // An empty file is an empty mapping, not an error.
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(contents).map_err(|source| Error::Configuration {
            path: path.to_path_buf(),
            source,
        })
    }
}
