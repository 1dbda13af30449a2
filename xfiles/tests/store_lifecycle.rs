//! Backing file lifecycle tests.

mod common;

use common::Fixture;
use std::fs;
use std::path::Path;
use xfiles::{CanonicalPath, PathList, Store, StoreConfig};

fn location(fx: &Fixture) -> String {
    fx.interpreter.store().location().as_str().to_string()
}

#[test]
fn test_created_lazily_on_first_write() {
    let fx = Fixture::new();
    fx.run(&[]);
    fx.run(&["++"]);
    assert!(!Path::new(&location(&fx)).exists());

    fx.run(&["+", "first"]);
    assert_eq!(fs::read_to_string(location(&fx)).unwrap(), "/tmp/first\n");
}

#[test]
fn test_reset_truncates_to_empty_file() {
    let fx = Fixture::new();
    fx.run(&["+", "first"]);
    fx.run(&["--"]);
    assert_eq!(fs::read_to_string(location(&fx)).unwrap(), "");
}

#[test]
fn test_external_deletion_behaves_like_fresh_store() {
    let fx = Fixture::new();
    fx.run(&["+", "first"]);
    fs::remove_file(location(&fx)).unwrap();

    assert!(fx.run(&[]).is_empty());
    assert_eq!(fx.run(&["+", "second"]), ["/tmp/second"]);
    assert!(Path::new(&location(&fx)).is_file());
}

#[test]
fn test_hand_edited_file_is_tolerated() {
    let fx = Fixture::new();
    fs::write(location(&fx), "/tmp/a\n\nnot-absolute\n/tmp/b").unwrap();
    assert_eq!(fx.run(&["+", "c"]), ["/tmp/a", "/tmp/b", "/tmp/c"]);
    assert_eq!(
        fs::read_to_string(location(&fx)).unwrap(),
        "/tmp/a\n/tmp/b\n/tmp/c\n"
    );
}

#[test]
fn test_concurrent_handles_see_whole_lists() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("xfiles"));
    let writer = Store::open(config.clone()).unwrap();
    let reader = Store::open(config).unwrap();

    let big = PathList::from_entries(
        (0..500)
            .map(|i| CanonicalPath::new(format!("/tmp/entry-{i}")).unwrap())
            .collect(),
    );
    let small = PathList::from_entries(vec![CanonicalPath::new("/tmp/only").unwrap()]);

    for round in 0..20 {
        let list = if round % 2 == 0 { &big } else { &small };
        writer.save(list).unwrap();
        let seen = reader.load().unwrap();
        assert!(seen == big || seen == small, "observed a partial list");
    }
}
