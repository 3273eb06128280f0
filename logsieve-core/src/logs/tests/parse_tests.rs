use crate::logs::{decompose, extract_lines, is_valid_type_token, parse_text};
use pretty_assertions::assert_eq;

#[test]
fn extracts_only_lines_starting_with_log_marker() {
    let text = concat!(
        "LogTemp: Display: Hello\n",
        "Some other line: with colon\n",
        "  LogIndented: not at line start\n",
        "LogCore: Warning: Init failed\n",
    );

    let lines = extract_lines(text);

    assert_eq!(lines, vec!["LogTemp: Display: Hello", "LogCore: Warning: Init failed"]);
}

#[test]
fn extracts_lines_with_timestamp_prefix() {
    let text = "[2024.01.02-10.11.12:345][  0]LogInit: Display: Engine starting\n";

    let lines = extract_lines(text);

    assert_eq!(
        lines,
        vec!["[2024.01.02-10.11.12:345][  0]LogInit: Display: Engine starting"]
    );
}

#[test]
fn extractor_requires_a_colon() {
    let lines = extract_lines("LogTemp without any colon\nLogTemp: ok\n");

    assert_eq!(lines, vec!["LogTemp: ok"]);
}

#[test]
fn extractor_strips_carriage_returns_and_keeps_inner_whitespace() {
    let lines = extract_lines("LogTemp: Display:   spaced    out  \r\nLogNet: x\r\n");

    assert_eq!(lines, vec!["LogTemp: Display:   spaced    out  ", "LogNet: x"]);
}

#[test]
fn extractor_returns_empty_for_text_without_candidates() {
    assert!(extract_lines("").is_empty());
    assert!(extract_lines("nothing to see here\nat all").is_empty());
}

#[test]
fn extractor_count_matches_candidate_lines() {
    let text = (0..50)
        .map(|i| {
            if i % 3 == 0 {
                format!("noise line {i}")
            } else {
                format!("LogTest: Display: line {i}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let expected = text.lines().filter(|l| l.starts_with("Log")).count();

    assert_eq!(extract_lines(&text).len(), expected);
}

#[test]
fn decomposes_category_type_and_message() {
    let record = decompose("LogTemp: Display: Hello world");

    assert_eq!(record.category.as_deref(), Some("Temp"));
    assert_eq!(record.severity_type.as_deref(), Some("Display"));
    assert_eq!(record.message.as_deref(), Some("Hello world"));
    assert_eq!(record.raw_text(), "LogTemp: Display: Hello world");
    assert_eq!(record.occurrence_count(), 1);
}

#[test]
fn decomposes_prefixed_line() {
    let record = decompose("[2024.01.02-10.11.12:345][ 12]LogNet: Warning: Timeout");

    assert_eq!(record.category.as_deref(), Some("Net"));
    assert_eq!(record.severity_type.as_deref(), Some("Warning"));
    assert_eq!(record.message.as_deref(), Some("Timeout"));
}

#[test]
fn line_without_type_segment_has_no_type() {
    let record = decompose("LogCore: malformed no colon message");

    assert_eq!(record.category.as_deref(), Some("Core"));
    assert_eq!(record.severity_type, None);
    assert_eq!(record.message.as_deref(), Some("malformed no colon message"));
}

#[test]
fn type_token_cannot_contain_whitespace() {
    let record = decompose("LogCore: two words: message");

    assert_eq!(record.severity_type, None);
    assert_eq!(record.message.as_deref(), Some("two words: message"));
}

#[test]
fn type_token_followed_by_double_colon_is_message() {
    let record = decompose("LogScript: Module::Function called");

    assert_eq!(record.severity_type, None);
    assert_eq!(record.message.as_deref(), Some("Module::Function called"));
}

#[test]
fn invalid_type_token_still_yields_record() {
    let record = decompose("LogCore: Bad!Type: malformed");

    assert_eq!(record.category.as_deref(), Some("Core"));
    assert_eq!(record.severity_type.as_deref(), Some("Bad!Type"));
    assert_eq!(record.message.as_deref(), Some("malformed"));
}

#[test]
fn unmatched_line_is_kept_unparsed() {
    let record = decompose("Log: nothing between marker and colon");

    assert_eq!(record.category, None);
    assert_eq!(record.severity_type, None);
    assert_eq!(record.message, None);
    assert_eq!(record.raw_text(), "Log: nothing between marker and colon");
}

#[test]
fn empty_message_is_absent() {
    let record = decompose("LogTemp: Display:   ");

    assert_eq!(record.severity_type.as_deref(), Some("Display"));
    assert_eq!(record.message, None);
}

#[test]
fn fields_are_trimmed() {
    let record = decompose("LogAudio :   Verbose:    mixer ready   ");

    assert_eq!(record.category.as_deref(), Some("Audio"));
    assert_eq!(record.severity_type.as_deref(), Some("Verbose"));
    assert_eq!(record.message.as_deref(), Some("mixer ready"));
}

#[test]
fn type_token_validation() {
    assert!(is_valid_type_token("Warning"));
    assert!(is_valid_type_token("Very_Verbose2"));
    assert!(!is_valid_type_token("Bad!Type"));
    assert!(!is_valid_type_token("a-b"));
}

#[test]
fn parse_text_keeps_every_candidate_line() {
    let text = "LogA: x\nLog: broken\nnot a log\nLogB: Error: y\n";

    let records = parse_text(text);

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].category, None);
}
