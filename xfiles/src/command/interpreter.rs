//! Command execution.
//!
//! The interpreter owns the store for one invocation. Operands are
//! normalized before the store is touched, so a bad operand aborts the
//! whole command with nothing written. Mutations are saved before the
//! result is returned, so callers only ever print committed state.

use std::fmt;

use crate::command::Command;
use crate::error::Result;
use crate::path::{CanonicalPath, HomeLookup, PathNormalizer};
use crate::store::{PathList, Store};

/// What a command produced, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The resulting list.
    List(PathList),
    /// The backing file location.
    Location(CanonicalPath),
}

impl Outcome {
    /// The output lines, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::List(list) => list.iter().map(CanonicalPath::as_str).collect(),
            Self::Location(path) => vec![path.as_str()],
        }
    }
}

/// Renders one line per entry, each terminated by a newline.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(list) => write!(f, "{list}"),
            Self::Location(path) => writeln!(f, "{path}"),
        }
    }
}

/// Executes commands against a store.
///
/// # Examples
///
/// ```
/// use xfiles::path::{HomeMap, PathNormalizer};
/// use xfiles::{CanonicalPath, Command, Interpreter, Store, StoreConfig};
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = Store::open(StoreConfig::new(dir.path().join("xfiles"))).unwrap();
/// let normalizer = PathNormalizer::new(CanonicalPath::new("/tmp").unwrap(), HomeMap::new());
/// let interpreter = Interpreter::new(store, normalizer);
///
/// let outcome = interpreter
///     .execute(Command::Add(vec!["first".into(), "first".into()]))
///     .unwrap();
/// assert_eq!(outcome.to_string(), "/tmp/first\n");
/// ```
#[derive(Debug)]
pub struct Interpreter<H> {
    store: Store,
    normalizer: PathNormalizer<H>,
}

impl<H: HomeLookup> Interpreter<H> {
    /// Create an interpreter over `store`.
    #[must_use]
    pub fn new(store: Store, normalizer: PathNormalizer<H>) -> Self {
        Self { store, normalizer }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Execute `command`.
    ///
    /// # Errors
    ///
    /// Returns a normalization error (nothing is written) or a store error.
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        log::debug!("executing {command}");
        let list = match command {
            Command::List => self.store.load()?,
            Command::Locate => return Ok(Outcome::Location(self.store.location().clone())),
            Command::Reset => {
                self.store.clear()?;
                PathList::new()
            }
            Command::Add(operands) => {
                let paths = self.normalizer.normalize_all(&operands)?;
                let mut list = self.store.load()?;
                let added = list.add(paths);
                log::info!("added {added} path(s)");
                self.store.save(&list)?;
                list
            }
            Command::Remove(operands) => {
                let paths = self.normalizer.normalize_all(&operands)?;
                let mut list = self.store.load()?;
                let removed = list.remove(&paths);
                log::info!("removed {removed} path(s)");
                self.store.save(&list)?;
                list
            }
            Command::Replace(operands) => {
                let list = PathList::from_entries(self.normalizer.normalize_all(&operands)?);
                self.store.save(&list)?;
                list
            }
        };
        Ok(Outcome::List(list))
    }
}
