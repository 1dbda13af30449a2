//! The backing file.
//!
//! The list lives in a single plain-text file, one canonical path per line.
//! Every save replaces the file atomically: content is written to a
//! temporary file in the same directory, synced, then renamed over the
//! target, so readers see either the old list or the new one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use nix::unistd::getuid;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::path::{normalize, CanonicalPath, HomeMap};
use crate::store::list::PathList;

/// File name prefix of the backing file in the default location.
pub const STORE_FILE_NAME: &str = "xfiles";

/// Location of the backing file.
///
/// # Examples
///
/// ```
/// use xfiles::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/scratch/xfiles");
/// assert_eq!(config.path.to_str().unwrap(), "/tmp/scratch/xfiles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Absolute path of the backing file.
    pub path: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration for the given backing file.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The built-in backing file location.
    ///
    /// Prefers `/dev/shm/xfiles-<uid>` when `/dev/shm` is a directory,
    /// otherwise the same name in the system temporary directory. The uid
    /// suffix keeps users on a shared host from colliding on one file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        let shm = Path::new("/dev/shm");
        let parent = if shm.is_dir() {
            shm.to_path_buf()
        } else {
            std::env::temp_dir()
        };
        parent.join(default_file_name())
    }
}

fn default_file_name() -> String {
    format!("{STORE_FILE_NAME}-{}", getuid())
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

/// Persistent ordered path list backed by a single file.
///
/// The file is created lazily on first save. If it is removed out of band,
/// the next load sees an empty list and the next save recreates it.
///
/// # Examples
///
/// ```
/// use xfiles::{CanonicalPath, PathList, Store, StoreConfig};
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = Store::open(StoreConfig::new(dir.path().join("xfiles"))).unwrap();
///
/// assert!(store.load().unwrap().is_empty());
///
/// let list = PathList::from_entries(vec![CanonicalPath::new("/tmp/first").unwrap()]);
/// store.save(&list).unwrap();
/// assert_eq!(store.load().unwrap(), list);
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    location: CanonicalPath,
}

impl Store {
    /// Open the store described by `config`. Nothing is read or created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the configured path is relative,
    /// not UTF-8, or the root directory.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidPath {
            path: config.path.clone(),
            reason: reason.to_string(),
        };
        let raw = config
            .path
            .to_str()
            .ok_or_else(|| invalid("store location contains invalid UTF-8"))?;
        if !raw.starts_with('/') {
            return Err(invalid("store location must be absolute"));
        }
        let location = normalize(raw, &CanonicalPath::root(), &HomeMap::new())?;
        if location.is_root() {
            return Err(invalid("store location must name a file"));
        }
        log::debug!("using store at {location}");
        Ok(Self { location })
    }

    /// The backing file's absolute path, whether or not it exists.
    #[must_use]
    pub fn location(&self) -> &CanonicalPath {
        &self.location
    }

    fn path(&self) -> &Path {
        self.location.as_ref()
    }

    /// Read the list. A missing backing file is an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreIo`] if the file exists but cannot be read.
    pub fn load(&self) -> Result<PathList> {
        match fs::read_to_string(self.path()) {
            Ok(text) => {
                let list = PathList::parse(&text);
                log::debug!("loaded {} entries from {}", list.len(), self.location);
                Ok(list)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} does not exist yet", self.location);
                Ok(PathList::new())
            }
            Err(e) => Err(Error::store_io(self.path(), e)),
        }
    }

    /// Atomically replace the backing file with `list`.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreIo`] if any step fails; the previous content
    /// then remains in place.
    pub fn save(&self, list: &PathList) -> Result<()> {
        let path = self.path();
        let parent = path.parent().unwrap_or_else(|| Path::new("/"));
        fs::create_dir_all(parent).map_err(|e| Error::store_io(parent, e))?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::store_io(parent, e))?;
        tmp.write_all(list.to_string().as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| Error::store_io(tmp.path(), e))?;
        tmp.persist(path)
            .map_err(|e| Error::store_io(path, e.error))?;

        log::debug!("saved {} entries to {}", list.len(), self.location);
        Ok(())
    }

    /// Replace the stored list with the empty list.
    ///
    /// # Errors
    ///
    /// See [`save`](Self::save).
    pub fn clear(&self) -> Result<()> {
        self.save(&PathList::new())
    }
}
