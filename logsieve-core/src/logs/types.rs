/// One decomposed log statement, plus every duplicate folded into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub category: Option<String>,
    pub severity_type: Option<String>,
    pub message: Option<String>,
    raw_text: String,
    /// Raw lines of every occurrence after the first.
    sibling_texts: Vec<String>,
}

impl LogRecord {
    pub fn new(
        raw_text: impl Into<String>,
        category: Option<String>,
        severity_type: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            category,
            severity_type,
            message,
            raw_text: raw_text.into(),
            sibling_texts: Vec::new(),
        }
    }

    /// A record for a line that could not be decomposed at all.
    pub fn unparsed(raw_text: impl Into<String>) -> Self {
        Self::new(raw_text, None, None, None)
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn sibling_texts(&self) -> &[String] {
        &self.sibling_texts
    }

    pub fn occurrence_count(&self) -> u64 {
        1 + self.sibling_texts.len() as u64
    }

    pub(crate) fn absorb(&mut self, raw_text: String) {
        self.sibling_texts.push(raw_text);
    }
}
