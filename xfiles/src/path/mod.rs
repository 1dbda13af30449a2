//! Lexical path normalization.
//!
//! This module turns user-supplied path strings into [`CanonicalPath`]
//! values without consulting the filesystem.
//!
//! # Key Concepts
//!
//! ## Anchors
//!
//! Every path is resolved against an anchor:
//! - `/...` is anchored at the root
//! - `~` and `~user` are anchored at a home directory, found through a
//!   [`HomeLookup`]
//! - anything else is anchored at the current working directory
//!
//! ## Segments
//!
//! After the anchor, empty and `.` segments are dropped and `..` pops the
//! previous segment. Popping past the root is a no-op, never an error.
//! Symlinks are not resolved and paths need not exist.
//!
//! # Examples
//!
//! ```
//! use xfiles::path::{HomeMap, PathNormalizer};
//! use xfiles::CanonicalPath;
//!
//! let normalizer = PathNormalizer::new(
//!     CanonicalPath::new("/tmp").unwrap(),
//!     HomeMap::new().with_current_user("alice", "/home/alice"),
//! );
//!
//! assert_eq!(normalizer.normalize("../bar/baz").unwrap().as_str(), "/bar/baz");
//! assert_eq!(normalizer.normalize("~/~").unwrap().as_str(), "/home/alice/~");
//! ```

pub mod home;
pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use home::{HomeLookup, HomeMap, SystemHomes};
pub use normalize::normalize;
pub use resolver::PathNormalizer;
pub use types::CanonicalPath;
