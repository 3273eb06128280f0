use crate::source::{FsSourceLoader, SourceError, SourceLoader};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_file_by_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Game.log");
    fs::write(&path, "LogTemp: hi\n").unwrap();

    let text = FsSourceLoader::default()
        .load(&path.to_string_lossy())
        .unwrap();

    assert_eq!(text, "LogTemp: hi\n");
}

#[test]
fn falls_back_to_configured_folder() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Game.log"), "LogTemp: from folder\n").unwrap();

    let loader = FsSourceLoader::new(Some(dir.path().to_path_buf()));

    assert_eq!(loader.load("Game.log").unwrap(), "LogTemp: from folder\n");
}

#[test]
fn appends_log_extension_when_missing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Game.log"), "LogTemp: no ext\n").unwrap();

    let loader = FsSourceLoader::new(Some(dir.path().to_path_buf()));

    assert_eq!(loader.load("Game").unwrap(), "LogTemp: no ext\n");
}

#[test]
fn strips_byte_order_mark() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Game.log");
    fs::write(&path, "\u{feff}LogTemp: first line\n").unwrap();

    let text = FsSourceLoader::default()
        .load(&path.to_string_lossy())
        .unwrap();

    assert_eq!(text, "LogTemp: first line\n");
}

#[test]
fn missing_source_lists_searched_paths() {
    let dir = tempdir().unwrap();
    let loader = FsSourceLoader::new(Some(dir.path().to_path_buf()));

    let err = loader.load("DoesNotExist").unwrap_err();

    match err {
        SourceError::NotFound { name, searched } => {
            assert_eq!(name, "DoesNotExist");
            assert_eq!(searched.len(), 4);
            assert_eq!(searched[1], dir.path().join("DoesNotExist"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
