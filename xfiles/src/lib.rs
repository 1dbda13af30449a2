#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # xfiles
//!
//! A library for maintaining a persistent, order-preserving, de-duplicated
//! list of filesystem paths.
//!
//! Paths are normalized lexically (tilde expansion, `.`/`..` resolution,
//! separator cleanup) and kept in a plain-text backing file that is
//! rewritten atomically on every change.
//!
//! ## Core Types
//!
//! - [`CanonicalPath`]: An absolute, normalized path string
//! - [`PathNormalizer`]: Normalizes operands against a cwd and home lookup
//! - [`PathList`] and [`Store`]: The ordered list and its backing file
//! - [`Command`] and [`Interpreter`]: The command grammar and its execution
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use xfiles::path::HomeMap;
//! use xfiles::{CanonicalPath, Command, Interpreter, PathNormalizer, Store, StoreConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = Store::open(StoreConfig::new(dir.path().join("xfiles"))).unwrap();
//! let normalizer = PathNormalizer::new(
//!     CanonicalPath::new("/tmp").unwrap(),
//!     HomeMap::new().with_current_user("alice", "/home/alice"),
//! );
//! let interpreter = Interpreter::new(store, normalizer);
//!
//! let args: Vec<String> = ["alpha", "~/beta"].iter().map(|s| s.to_string()).collect();
//! let command = Command::classify(&args, || Ok(None)).unwrap();
//! let outcome = interpreter.execute(command).unwrap();
//! assert_eq!(outcome.lines(), ["/tmp/alpha", "/home/alice/beta"]);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod store;

// Re-export key types at crate root for convenience
pub use command::{Command, Interpreter, Outcome};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{CanonicalPath, HomeLookup, PathNormalizer, SystemHomes};
pub use store::{PathList, Store, StoreConfig};
