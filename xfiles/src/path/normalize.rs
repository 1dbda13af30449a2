//! Path normalization.
//!
//! Normalization turns an arbitrary user-supplied path string into a
//! [`CanonicalPath`] without touching the filesystem:
//! - A leading `~` or `~user` is replaced by that user's home directory
//! - Relative paths are anchored at the current working directory
//! - Empty and `.` segments are dropped
//! - `..` pops the previous segment, clamping at the root
//!
//! Only `/`, `.`, `..` and a leading `~` are interpreted. Every other
//! character, including a `~` anywhere but the very start, passes through.

use crate::error::{Error, Result};
use crate::path::home::HomeLookup;
use crate::path::types::CanonicalPath;

/// Where a raw path is anchored, and what follows the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor<'a> {
    /// Starts with `/`.
    Root(&'a str),
    /// Starts with `~` (user `None`) or `~name`.
    Home {
        user: Option<&'a str>,
        rest: &'a str,
    },
    /// Anything else is relative to the working directory.
    Cwd(&'a str),
}

fn split_anchor(raw: &str) -> Anchor<'_> {
    if let Some(rest) = raw.strip_prefix('/') {
        return Anchor::Root(rest);
    }
    if let Some(tilde) = raw.strip_prefix('~') {
        let (token, rest) = tilde.split_once('/').unwrap_or((tilde, ""));
        let user = (!token.is_empty()).then_some(token);
        return Anchor::Home { user, rest };
    }
    Anchor::Cwd(raw)
}

/// Apply the segments of `path` to `stack`.
///
/// Empty and `.` segments are skipped; `..` pops, and is a no-op at the root.
fn push_segments<'a>(stack: &mut Vec<&'a str>, path: &'a str) {
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            _ => stack.push(segment),
        }
    }
}

/// Normalize `raw` to a canonical absolute path.
///
/// # Errors
///
/// Returns [`Error::UserNotFound`] if a leading `~user` cannot be resolved,
/// or [`Error::InvalidPath`] if the resolved home directory is not valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// use xfiles::path::{normalize, HomeMap};
/// use xfiles::CanonicalPath;
///
/// let cwd = CanonicalPath::new("/tmp").unwrap();
/// let homes = HomeMap::new()
///     .with_current_user("alice", "/home/alice")
///     .with_user("root", "/root");
///
/// assert_eq!(normalize("first", &cwd, &homes).unwrap().as_str(), "/tmp/first");
/// assert_eq!(normalize("/foo/bar/../../baz", &cwd, &homes).unwrap().as_str(), "/baz");
/// assert_eq!(normalize("~", &cwd, &homes).unwrap().as_str(), "/home/alice");
/// assert_eq!(normalize("~root", &cwd, &homes).unwrap().as_str(), "/root");
/// assert_eq!(normalize("/foo/bar/~/baz", &cwd, &homes).unwrap().as_str(), "/foo/bar/~/baz");
/// assert!(normalize("~nobody/x", &cwd, &homes).is_err());
/// ```
pub fn normalize<H>(raw: &str, cwd: &CanonicalPath, homes: &H) -> Result<CanonicalPath>
where
    H: HomeLookup + ?Sized,
{
    let home;
    let (anchor, rest) = match split_anchor(raw) {
        Anchor::Root(rest) => ("", rest),
        Anchor::Cwd(rest) => (cwd.as_str(), rest),
        Anchor::Home { user, rest } => {
            home = homes.home_dir(user).ok_or_else(|| Error::UserNotFound {
                user: user.unwrap_or_default().to_string(),
            })?;
            let home_str = home.to_str().ok_or_else(|| Error::InvalidPath {
                path: home.clone(),
                reason: "home directory contains invalid UTF-8".to_string(),
            })?;
            (home_str, rest)
        }
    };

    let mut stack = Vec::new();
    push_segments(&mut stack, anchor);
    push_segments(&mut stack, rest);
    Ok(CanonicalPath::from_segments(stack))
}
