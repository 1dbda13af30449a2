//! Configuration system for xfiles.
//!
//! The only configurable value is where the backing file lives. It is
//! resolved once per invocation and injected into the [`Store`] as a
//! [`StoreConfig`].
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_storage`)
//! 2. Environment variables (`XFILES_STORAGE`)
//! 3. User config (`~/.xfiles/config.yaml`, or `$XFILES_CONFIG`)
//! 4. Built-in default (`/dev/shm/xfiles-<uid>`, or the same name in the temp dir)
//!
//! # Examples
//!
//! ```no_run
//! use xfiles::config::ConfigBuilder;
//! use xfiles::Store;
//!
//! let store = Store::open(ConfigBuilder::new().build().unwrap()).unwrap();
//! println!("{}", store.location());
//! ```
//!
//! [`Store`]: crate::store::Store
//! [`StoreConfig`]: crate::store::StoreConfig

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, STORAGE_ENV};
pub use loader::{ConfigLoader, CONFIG_FILE_ENV};
pub use schema::Config;
