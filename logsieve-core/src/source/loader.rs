use crate::source::error::SourceError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const LOG_EXTENSION: &str = "log";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Supplies raw text for a named log source.
pub trait SourceLoader {
    fn load(&self, name: &str) -> Result<String, SourceError>;
}

/// Looks a name up as a path, then inside the configured log folder.
///
/// Names without an extension are retried with `.log` appended.
#[derive(Debug, Clone, Default)]
pub struct FsSourceLoader {
    folder: Option<PathBuf>,
}

impl FsSourceLoader {
    pub fn new(folder: Option<PathBuf>) -> Self {
        Self { folder }
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    /// Candidate paths for `name`, in lookup order.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let direct = PathBuf::from(name);
        let mut bases = vec![direct.clone()];
        if let Some(folder) = &self.folder {
            if direct.is_relative() {
                bases.push(folder.join(&direct));
            }
        }

        let mut out = bases.clone();
        if direct.extension().is_none() {
            out.extend(bases.iter().map(|b| b.with_extension(LOG_EXTENSION)));
        }
        out
    }
}

impl SourceLoader for FsSourceLoader {
    fn load(&self, name: &str) -> Result<String, SourceError> {
        let searched = self.candidates(name);

        for path in &searched {
            match fs::read(path) {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes);
                    return Ok(text.trim_start_matches(BYTE_ORDER_MARK).to_string());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(SourceError::Read {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }

        Err(SourceError::NotFound {
            name: name.to_string(),
            searched,
        })
    }
}
