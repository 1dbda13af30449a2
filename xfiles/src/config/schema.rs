//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings read from the user configuration file or the environment.
///
/// # Examples
///
/// ```
/// use xfiles::config::Config;
///
/// let config: Config = serde_yaml::from_str("storage: /var/tmp/xfiles").unwrap();
/// assert_eq!(config.storage.unwrap().to_str().unwrap(), "/var/tmp/xfiles");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Absolute path of the backing file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<PathBuf>,
}

impl Config {
    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merge(&mut self, other: Config) {
        if other.storage.is_some() {
            self.storage = other.storage;
        }
    }
}
