//! Home directory lookup for `~` and `~user` expansion.
//!
//! Lookup is behind the [`HomeLookup`] trait so normalization never has to
//! touch the real account database in tests.

use std::collections::HashMap;
use std::path::PathBuf;

use nix::unistd::User;

/// Resolves user names to home directories.
pub trait HomeLookup {
    /// Returns the home directory of `user`, or of the current user when
    /// `user` is `None`. Returns `None` if the user is unknown.
    fn home_dir(&self, user: Option<&str>) -> Option<PathBuf>;
}

/// Home lookup backed by the host operating environment.
///
/// The current user's home comes from the `home` crate, which honors
/// `$HOME`. Named users go through the system user database, so accounts
/// from any configured name service resolve, not only local ones.
///
/// # Examples
///
/// ```no_run
/// use xfiles::path::{HomeLookup, SystemHomes};
///
/// let homes = SystemHomes::new();
/// assert!(homes.home_dir(Some("root")).is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHomes;

impl SystemHomes {
    /// Create a lookup against the system user database.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn lookup_named(user: &str) -> Option<PathBuf> {
        match User::from_name(user) {
            Ok(found) => found
                .map(|entry| entry.dir)
                .filter(|home| !home.as_os_str().is_empty()),
            Err(e) => {
                log::warn!("user database lookup for {user:?} failed: {e}");
                None
            }
        }
    }
}

impl HomeLookup for SystemHomes {
    fn home_dir(&self, user: Option<&str>) -> Option<PathBuf> {
        match user {
            None => home::home_dir().filter(|home| !home.as_os_str().is_empty()),
            Some(name) => Self::lookup_named(name),
        }
    }
}

/// An in-memory home lookup with a distinguished current user.
///
/// # Examples
///
/// ```
/// use xfiles::path::{HomeLookup, HomeMap};
/// use std::path::PathBuf;
///
/// let homes = HomeMap::new()
///     .with_current_user("alice", "/home/alice")
///     .with_user("root", "/root");
///
/// assert_eq!(homes.home_dir(None), Some(PathBuf::from("/home/alice")));
/// assert_eq!(homes.home_dir(Some("alice")), Some(PathBuf::from("/home/alice")));
/// assert_eq!(homes.home_dir(Some("root")), Some(PathBuf::from("/root")));
/// assert_eq!(homes.home_dir(Some("bob")), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HomeMap {
    current: Option<PathBuf>,
    users: HashMap<String, PathBuf>,
}

impl HomeMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the current user, reachable both as `~` and `~name`.
    #[must_use]
    pub fn with_current_user(mut self, name: &str, home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        self.current = Some(home.clone());
        self.users.insert(name.to_string(), home);
        self
    }

    /// Register another user.
    #[must_use]
    pub fn with_user(mut self, name: &str, home: impl Into<PathBuf>) -> Self {
        self.users.insert(name.to_string(), home.into());
        self
    }
}

impl HomeLookup for HomeMap {
    fn home_dir(&self, user: Option<&str>) -> Option<PathBuf> {
        match user {
            None => self.current.clone(),
            Some(name) => self.users.get(name).cloned(),
        }
    }
}
