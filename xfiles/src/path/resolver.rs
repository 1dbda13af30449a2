//! Operand resolution against a fixed environment.
//!
//! This module provides the `PathNormalizer` type, which binds the working
//! directory and home lookup of one invocation so operands can be
//! normalized one after another.

use std::path::Path;

use crate::error::{Error, Result};
use crate::path::home::HomeLookup;
use crate::path::normalize::normalize;
use crate::path::types::CanonicalPath;

/// Normalizes operands against a captured working directory and home lookup.
///
/// # Examples
///
/// ```
/// use xfiles::path::{HomeMap, PathNormalizer};
/// use xfiles::CanonicalPath;
///
/// let normalizer = PathNormalizer::new(
///     CanonicalPath::new("/tmp").unwrap(),
///     HomeMap::new().with_current_user("alice", "/home/alice"),
/// );
///
/// let paths = normalizer.normalize_all(["alpha", "", "~/beta"]).unwrap();
/// let paths: Vec<&str> = paths.iter().map(|p| p.as_str()).collect();
/// assert_eq!(paths, ["/tmp/alpha", "/home/alice/beta"]);
/// ```
#[derive(Debug, Clone)]
pub struct PathNormalizer<H> {
    cwd: CanonicalPath,
    homes: H,
}

impl<H: HomeLookup> PathNormalizer<H> {
    /// Create a normalizer for the given working directory.
    #[must_use]
    pub fn new(cwd: CanonicalPath, homes: H) -> Self {
        Self { cwd, homes }
    }

    /// Create a normalizer from a host working directory.
    ///
    /// The directory is taken as-is (symlinks are not resolved) and only
    /// lexically cleaned up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `cwd` is relative or not UTF-8.
    pub fn from_cwd(cwd: &Path, homes: H) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidPath {
            path: cwd.to_path_buf(),
            reason: reason.to_string(),
        };
        let cwd_str = cwd
            .to_str()
            .ok_or_else(|| invalid("working directory contains invalid UTF-8"))?;
        if !cwd_str.starts_with('/') {
            return Err(invalid("working directory must be absolute"));
        }
        let cwd = normalize(cwd_str, &CanonicalPath::root(), &homes)?;
        Ok(Self::new(cwd, homes))
    }

    /// The working directory relative paths are anchored at.
    #[must_use]
    pub fn cwd(&self) -> &CanonicalPath {
        &self.cwd
    }

    /// Normalize a single operand.
    ///
    /// # Errors
    ///
    /// See [`normalize`].
    pub fn normalize(&self, raw: &str) -> Result<CanonicalPath> {
        normalize(raw, &self.cwd, &self.homes)
    }

    /// Normalize every non-empty operand, in order.
    ///
    /// Empty operands are skipped. The first failure aborts the whole batch
    /// so callers never act on a partial result.
    ///
    /// # Errors
    ///
    /// Returns the first normalization error encountered.
    pub fn normalize_all<I, S>(&self, operands: I) -> Result<Vec<CanonicalPath>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        operands
            .into_iter()
            .filter(|raw| !raw.as_ref().is_empty())
            .map(|raw| self.normalize(raw.as_ref()))
            .collect()
    }
}
