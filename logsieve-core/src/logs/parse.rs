use crate::logs::constants::VOLATILE_PREFIX;
use crate::logs::types::LogRecord;
use once_cell::sync::Lazy;
use regex::Regex;

static CANDIDATE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?m)^(?:{VOLATILE_PREFIX})?Log[^\r\n]*?:[^\r\n]*"))
        .expect("candidate line pattern is valid")
});

static STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:{VOLATILE_PREFIX})?Log(?P<category>[^:\r\n]+):(?P<rest>[^\r\n]*)$"
    ))
    .expect("statement pattern is valid")
});

// The type token cannot hold whitespace or a colon; `rest` must not open with a second colon.
static TYPE_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<type>[^:\s]+):(?P<rest>.*)$").expect("type segment pattern is valid")
});

/// Every line in `text` that looks like an engine log statement, in input order.
///
/// Lines may carry a `[timestamp][frame]` prefix in front of the `Log` marker.
/// Anything else at the start of the line disqualifies it.
pub fn extract_lines(text: &str) -> Vec<&str> {
    CANDIDATE_LINE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Splits one candidate line into category, severity type and message.
///
/// Lines the statement pattern rejects are kept as unparsed records so totals stay
/// faithful to the input.
pub fn decompose(line: &str) -> LogRecord {
    let Some(caps) = STATEMENT.captures(line) else {
        tracing::warn!(
            missing = "category, message",
            line,
            "log line did not match the statement pattern"
        );
        return LogRecord::unparsed(line);
    };

    let category = non_empty(&caps["category"]);
    let rest = &caps["rest"];

    let (severity_type, message) = match TYPE_SEGMENT.captures(rest) {
        Some(seg) if !seg["rest"].starts_with(':') => {
            (non_empty(&seg["type"]), non_empty(&seg["rest"]))
        }
        _ => (None, non_empty(rest)),
    };

    match (&category, &message) {
        (Some(_), Some(_)) => {}
        (None, None) => tracing::warn!(
            missing = "category, message",
            line,
            "log line decomposition incomplete"
        ),
        (None, Some(_)) => {
            tracing::warn!(missing = "category", line, "log line decomposition incomplete")
        }
        (Some(_), None) => {
            tracing::warn!(missing = "message", line, "log line decomposition incomplete")
        }
    }

    if let Some(token) = &severity_type {
        if !is_valid_type_token(token) {
            tracing::error!(
                severity_type = token.as_str(),
                line,
                "log type token contains invalid characters"
            );
        }
    }

    LogRecord::new(line, category, severity_type, message)
}

/// Type tokens are limited to ASCII letters, digits, underscores and whitespace.
pub fn is_valid_type_token(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace())
}

pub fn parse_text(text: &str) -> Vec<LogRecord> {
    extract_lines(text).into_iter().map(decompose).collect()
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
