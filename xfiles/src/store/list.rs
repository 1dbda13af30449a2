//! The ordered path list.

use std::collections::HashSet;

use crate::path::CanonicalPath;

/// An ordered sequence of canonical paths.
///
/// [`add`](Self::add) keeps set semantics (first occurrence wins, order
/// preserved). [`from_entries`](Self::from_entries) stores the given
/// sequence verbatim, duplicates included.
///
/// # Examples
///
/// ```
/// use xfiles::{CanonicalPath, PathList};
///
/// let p = |s: &str| CanonicalPath::new(s).unwrap();
///
/// let mut list = PathList::new();
/// list.add([p("/tmp/first"), p("/tmp/second"), p("/tmp/first")]);
/// assert_eq!(list.len(), 2);
///
/// list.remove(&[p("/tmp/first"), p("/tmp/missing")]);
/// assert_eq!(list.to_string(), "/tmp/second\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<CanonicalPath>,
}

impl PathList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list holding `entries` exactly as given.
    #[must_use]
    pub fn from_entries(entries: Vec<CanonicalPath>) -> Self {
        Self { entries }
    }

    /// Parse the backing file format: one canonical path per line.
    ///
    /// Blank lines are ignored. Lines that are not canonical paths are
    /// dropped with a warning.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter(|line| !line.is_empty())
            .filter_map(|line| match CanonicalPath::new(line) {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("ignoring stored entry: {e}");
                    None
                }
            })
            .collect();
        Self { entries }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalPath> {
        self.entries.iter()
    }

    /// The entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CanonicalPath] {
        &self.entries
    }

    /// Append each path not already present, in order of first occurrence.
    ///
    /// Returns the number of entries appended.
    pub fn add(&mut self, paths: impl IntoIterator<Item = CanonicalPath>) -> usize {
        let mut seen: HashSet<CanonicalPath> = self.entries.iter().cloned().collect();
        let before = self.entries.len();
        for path in paths {
            if seen.insert(path.clone()) {
                self.entries.push(path);
            }
        }
        self.entries.len() - before
    }

    /// Delete every entry equal to one of `paths`, keeping the order of
    /// the rest. Absent paths are ignored.
    ///
    /// Returns the number of entries deleted.
    pub fn remove(&mut self, paths: &[CanonicalPath]) -> usize {
        let doomed: HashSet<&CanonicalPath> = paths.iter().collect();
        let before = self.entries.len();
        self.entries.retain(|entry| !doomed.contains(entry));
        before - self.entries.len()
    }
}

/// Renders the backing file format: each entry followed by a newline.
impl std::fmt::Display for PathList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a CanonicalPath;
    type IntoIter = std::slice::Iter<'a, CanonicalPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for PathList {
    type Item = CanonicalPath;
    type IntoIter = std::vec::IntoIter<CanonicalPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
