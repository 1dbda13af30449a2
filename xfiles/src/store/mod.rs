//! Persistent storage for the path list.
//!
//! [`PathList`] holds the in-memory ordered list and its add/remove/replace
//! semantics. [`Store`] persists it to a single backing file whose location
//! comes from a [`StoreConfig`], so tests can point it at scratch space.

pub mod backing;
pub mod list;

pub use backing::{Store, StoreConfig, STORE_FILE_NAME};
pub use list::PathList;
