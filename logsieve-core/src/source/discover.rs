use crate::source::error::SourceError;
use glob::glob;
use std::path::{Path, PathBuf};

/// Discovers files matching a glob pattern.
///
/// Searches the filesystem for all files that match the given glob pattern
/// and returns their paths in sorted order. Invalid paths are silently filtered out.
///
/// # Arguments
///
/// * `root` - Directory the pattern is resolved against
/// * `glob_pattern` - A glob pattern string (e.g., `"*.log"`)
///
/// # Errors
///
/// Returns `SourceError::Glob` if the pattern is malformed or cannot be parsed.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, SourceError> {
    let pattern = &resolve_glob(root, glob_pattern);
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| SourceError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Joins `pattern` onto `root` and returns it as a glob string.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}
