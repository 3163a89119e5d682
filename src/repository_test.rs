use super::*;

const BARE: &str = r#"[
    {"id":"1","name":"Board 1","tasks":[{"id":"1","name":"Task 1"},{"id":"2","name":"Task 2"}]},
    {"id":"2","name":"Board 2","tasks":[{"id":"3","name":"Task 3"},{"id":"4","name":"Task 4"}]}
]"#;

#[test]
fn decode_accepts_bare_array() {
    let boards = decode_boards(BARE).unwrap();
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0].id, "1");
    assert_eq!(boards[0].tasks[1].name, "Task 2");
    assert_eq!(boards[1].tasks.len(), 2);
}

#[test]
fn decode_accepts_single_key_envelope() {
    let json = format!(r#"{{"kanbanBoard":{BARE}}}"#);
    let boards = decode_boards(&json).unwrap();
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[1].name, "Board 2");
}

#[test]
fn decode_envelope_key_name_is_irrelevant() {
    let json = format!(r#"{{"data":{BARE}}}"#);
    let boards = decode_boards(&json).unwrap();
    assert_eq!(boards.len(), 2);
}

#[test]
fn decode_rejects_multi_key_envelope() {
    let json = r#"{"a":[],"b":[]}"#;
    let err = decode_boards(json).unwrap_err();
    assert!(matches!(err, RepositoryError::Envelope { keys: 2 }));
}

#[test]
fn decode_rejects_empty_envelope() {
    let err = decode_boards("{}").unwrap_err();
    assert!(matches!(err, RepositoryError::Envelope { keys: 0 }));
}

#[test]
fn decode_rejects_malformed_json() {
    let err = decode_boards("not json").unwrap_err();
    assert!(matches!(err, RepositoryError::Decode(_)));
}

#[test]
fn decode_rejects_envelope_with_non_list_value() {
    let err = decode_boards(r#"{"kanbanBoard":"nope"}"#).unwrap_err();
    assert!(matches!(err, RepositoryError::Decode(_)));
}

#[test]
fn decode_tolerates_boards_without_tasks() {
    let boards = decode_boards(r#"[{"id":"1","name":"Board 1"}]"#).unwrap();
    assert_eq!(boards.len(), 1);
    assert!(boards[0].tasks.is_empty());
}

#[test]
fn decode_accepts_empty_list() {
    assert!(decode_boards("[]").unwrap().is_empty());
}

#[test]
fn default_timeouts_match_constants() {
    let timeouts = RepositoryTimeouts::default();
    assert_eq!(timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn status_error_reports_status_code() {
    let err = RepositoryError::Status { status: 502, body: "bad gateway".into() };
    assert_eq!(err.to_string(), "board fetch error: status 502");
}

#[test]
fn envelope_error_reports_key_count() {
    let err = RepositoryError::Envelope { keys: 3 };
    assert_eq!(err.to_string(), "board payload envelope has 3 keys, expected exactly one");
}
