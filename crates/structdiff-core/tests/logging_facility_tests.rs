#![allow(clippy::unwrap_used, clippy::expect_used)]

use structdiff_core::errors::StructDiffError;
use structdiff_core::logging_facility::test_capture::init_test_capture;
use structdiff_core::{
    find_differences, find_differences_with, log_op_end, log_op_error, log_op_start,
    parse_document, DiffOptions,
};
use structdiff_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DIFF_COUNT, FIELD_ERR_CODE, FIELD_MAX_DEPTH,
    OP_FIND_DIFFERENCES, OP_PARSE_DOCUMENT,
};
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, max_depth = 3);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(events[0].field(FIELD_MAX_DEPTH), Some("3"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].duration_ms(), Some(42));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = StructDiffError::InvalidConfig {
        reason: "bad".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let events = capture.events_for_op(op_name);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_INVALID_CONFIG"));
    assert_eq!(events[0].error(), Some(("InvalidConfig", "ERR_INVALID_CONFIG")));
    assert_eq!(events[0].duration_ms(), Some(10));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_assert_event_exists_fails_for_unknown_op() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

// ---------------------------------------------------------------------------
// Engine instrumentation
// ---------------------------------------------------------------------------

#[test]
fn test_find_differences_logs_start_end_and_each_difference() {
    let capture = init_test_capture();

    // Keys unique to this test; other tests log concurrently.
    let expected = serde_json::json!({"logging_marker_a": 1, "logging_marker_b": [1, 2]});
    let actual = serde_json::json!({"logging_marker_a": 2, "logging_marker_b": [1]});

    let diffs = find_differences(&expected, &actual);
    assert_eq!(diffs.len(), 2);

    let recorded: Vec<(String, String)> = capture
        .differences()
        .into_iter()
        .filter(|(path, _)| path.contains("logging_marker"))
        .collect();
    assert_eq!(
        recorded,
        vec![
            ("[logging_marker_a]".to_string(), "value_mismatch".to_string()),
            ("[logging_marker_b]".to_string(), "length_mismatch".to_string()),
        ]
    );

    capture.assert_event_exists(OP_FIND_DIFFERENCES, EVENT_START);
    let ends: Vec<_> = capture
        .events_for_op(OP_FIND_DIFFERENCES)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert!(ends.iter().any(|e| e.field(FIELD_DIFF_COUNT) == Some("2")));
}

#[test]
fn test_parse_document_failure_logs_error_event() {
    let capture = init_test_capture();

    assert!(parse_document(b"{\"unterminated\": ").is_err());

    let errors: Vec<_> = capture
        .events_for_op(OP_PARSE_DOCUMENT)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert!(errors
        .iter()
        .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_INVALID_DOCUMENT")));
}

#[test]
fn test_find_differences_start_records_max_depth() {
    let capture = init_test_capture();

    let doc = serde_json::json!({"depth_limited": [1]});
    let options = DiffOptions::default().with_max_depth(7);
    assert!(find_differences_with(&doc, &doc.clone(), &options).is_empty());

    let starts: Vec<_> = capture
        .events_for_op(OP_FIND_DIFFERENCES)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();
    assert!(starts
        .iter()
        .any(|e| e.field(FIELD_MAX_DEPTH) == Some("Some(7)")));
}
