//! The canonical path value type.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// An absolute, separator-normalized path string with `.` and `..` resolved.
///
/// A canonical path always begins with `/`, contains no `.` or `..`
/// segments, no empty segments, and no trailing separator except for the
/// root itself. Equality is exact string equality: no case folding and no
/// symlink resolution.
///
/// # Examples
///
/// ```
/// use xfiles::CanonicalPath;
///
/// let path = CanonicalPath::new("/foo/.bar/baz").unwrap();
/// assert_eq!(path.as_str(), "/foo/.bar/baz");
///
/// assert!(CanonicalPath::new("/foo/../baz").is_err());
/// assert!(CanonicalPath::new("relative").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// The root path `/`.
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Validates that `value` is already in canonical form.
    ///
    /// This does not normalize; use [`crate::path::normalize`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the value is not canonical.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if let Some(reason) = Self::violation(&value) {
            return Err(Error::InvalidPath {
                path: value.into(),
                reason: reason.to_string(),
            });
        }
        Ok(Self(value))
    }

    fn violation(value: &str) -> Option<&'static str> {
        let Some(rest) = value.strip_prefix('/') else {
            return Some("canonical paths must be absolute");
        };
        if rest.is_empty() {
            return None;
        }
        rest.split('/').find_map(|segment| match segment {
            "" => Some("canonical paths have no empty segments or trailing separator"),
            "." | ".." => Some("canonical paths have no '.' or '..' segments"),
            _ => None,
        })
    }

    /// Builds a canonical path from already-validated segments.
    pub(crate) fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut value = String::new();
        for segment in segments {
            value.push('/');
            value.push_str(segment);
        }
        if value.is_empty() {
            value.push('/');
        }
        Self(value)
    }

    /// Returns true if this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// The path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
