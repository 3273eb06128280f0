use crate::source::{SourceError, discover, resolve_glob};

use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn discover_finds_matching_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("a.log"), "").unwrap();
    fs::write(root.join("b.log"), "").unwrap();
    fs::write(root.join("c.txt"), "").unwrap();

    // Act
    let result = discover(root, "*.log").unwrap();

    // Assert
    assert_eq!(result, vec![root.join("a.log"), root.join("b.log")]);
}

#[test]
fn discover_returns_sorted_paths() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("Game-backup-2.log"), "").unwrap();
    fs::write(root.join("Game.log"), "").unwrap();
    fs::write(root.join("Game-backup-1.log"), "").unwrap();

    let result = discover(root, "*.log").unwrap();

    assert_eq!(
        result,
        vec![
            root.join("Game-backup-1.log"),
            root.join("Game-backup-2.log"),
            root.join("Game.log"),
        ]
    );
}

#[test]
fn discover_skips_directories() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("archive.log")).unwrap();
    fs::write(root.join("Game.log"), "").unwrap();

    let result = discover(root, "*.log").unwrap();

    assert_eq!(result, vec![root.join("Game.log")]);
}

#[test]
fn discover_returns_empty_vec_when_no_matches() {
    let dir = tempdir().unwrap();

    let result = discover(dir.path(), "*.log").unwrap();

    assert!(result.is_empty());
}

#[test]
fn discover_rejects_malformed_pattern() {
    let dir = tempdir().unwrap();

    let err = discover(dir.path(), "[*.log").unwrap_err();

    assert!(matches!(err, SourceError::Glob { .. }));
}

#[test]
fn resolve_glob_joins_root_and_pattern() {
    let resolved = resolve_glob(Path::new("/var/logs"), "*.log");

    assert_eq!(resolved, Path::new("/var/logs").join("*.log").to_string_lossy());
}
