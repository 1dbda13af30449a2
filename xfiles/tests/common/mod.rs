//! Common test utilities for library integration tests.

use tempfile::TempDir;
use xfiles::path::HomeMap;
use xfiles::{CanonicalPath, Command, Interpreter, PathNormalizer, Store, StoreConfig};

/// An interpreter over a scratch store, with cwd `/tmp`, current user
/// `alice` at `/home/alice`, and `root` at `/root`.
pub struct Fixture {
    /// Temporary directory holding the backing file
    pub temp_dir: TempDir,
    /// The interpreter under test
    pub interpreter: Interpreter<HomeMap>,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = Store::open(StoreConfig::new(temp_dir.path().join("xfiles")))
            .expect("Failed to open store");
        let homes = HomeMap::new()
            .with_current_user("alice", "/home/alice")
            .with_user("root", "/root");
        let normalizer = PathNormalizer::new(CanonicalPath::new("/tmp").unwrap(), homes);

        Self {
            temp_dir,
            interpreter: Interpreter::new(store, normalizer),
        }
    }

    /// A second store handle on the same backing file, as another
    /// invocation would see it.
    pub fn reopen(&self) -> Store {
        Store::open(StoreConfig::new(self.temp_dir.path().join("xfiles")))
            .expect("Failed to reopen store")
    }

    /// Classify `args` (terminal stdin) and execute, returning output lines.
    pub fn run(&self, args: &[&str]) -> Vec<String> {
        self.run_with_stdin(args, None)
    }

    /// Classify `args` with optional piped lines and execute.
    pub fn run_with_stdin(&self, args: &[&str], piped: Option<&[&str]>) -> Vec<String> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        let piped: Option<Vec<String>> =
            piped.map(|lines| lines.iter().map(ToString::to_string).collect());
        let command = Command::classify(&args, || Ok(piped)).expect("classify failed");
        let outcome = self.interpreter.execute(command).expect("execute failed");
        outcome.lines().into_iter().map(String::from).collect()
    }
}
