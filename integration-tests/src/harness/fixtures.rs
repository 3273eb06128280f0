use logsieve_core::source::{SourceError, SourceLoader};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn fixture_path(file: &str) -> PathBuf {
    fixture_dir().join(file)
}

pub fn read_fixture(file: &str) -> String {
    fs::read_to_string(fixture_path(file)).expect("fixture exists")
}

/// In-memory sources keyed by name.
#[derive(Default)]
pub struct MapSourceLoader {
    sources: HashMap<String, String>,
}

impl MapSourceLoader {
    pub fn with(mut self, name: &str, text: &str) -> Self {
        self.sources.insert(name.to_string(), text.to_string());
        self
    }
}

impl SourceLoader for MapSourceLoader {
    fn load(&self, name: &str) -> Result<String, SourceError> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                name: name.to_string(),
                searched: Vec::new(),
            })
    }
}
