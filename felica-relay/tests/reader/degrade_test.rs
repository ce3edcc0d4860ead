use crate::common::fixtures::attribute_block;
use crate::common::helpers::{blocks_body, mock_reader, sample_identity};
use felica_relay::Error;
use felica_relay::card::StationTable;
use felica_relay::transport::{HttpResponse, MockTransport};
use serde_json::Value;

#[test]
fn unauthorized_returns_identity_only() {
    let mut mock = MockTransport::new();
    mock.push_response(HttpResponse::new(401, "Unauthorized", r#"{"detail":"bad token"}"#));
    let mut reader = mock_reader(mock, StationTable::new()).unwrap();

    let outcome = reader.read(&sample_identity());
    assert!(!outcome.is_complete());
    assert_eq!(
        outcome.reason(),
        Some(&Error::Network {
            status_code: Some(401),
            status_message: "Unauthorized".into(),
        })
    );

    let record = outcome.into_record();
    assert_eq!(record.identity(), &sample_identity());
    assert!(record.balance().is_none());
    assert!(record.issue().is_none());
    assert!(record.history().is_empty());
    assert!(record.commuter_pass().is_none());

    let diag: Value = serde_json::from_str(record.diagnostics()).unwrap();
    assert!(diag["error"].as_str().unwrap().contains("401"));
}

#[test]
fn unreachable_server_returns_identity_only() {
    let mut mock = MockTransport::new();
    mock.push_failure("connection refused");
    let mut reader = mock_reader(mock, StationTable::new()).unwrap();

    let outcome = reader.read(&sample_identity());
    assert!(matches!(
        outcome.reason(),
        Some(Error::Network {
            status_code: None,
            ..
        })
    ));
    assert!(outcome.record().diagnostics().contains("connection refused"));
}

#[test]
fn empty_auth_body_degrades() {
    let mut mock = MockTransport::new();
    mock.push_ok("");
    let mut reader = mock_reader(mock, StationTable::new()).unwrap();

    let outcome = reader.read(&sample_identity());
    assert_eq!(outcome.reason(), Some(&Error::EmptyResponse));
}

#[test]
fn non_object_auth_body_degrades() {
    let mut mock = MockTransport::new();
    mock.push_ok("[]");
    let mut reader = mock_reader(mock, StationTable::new()).unwrap();

    let outcome = reader.read(&sample_identity());
    assert!(matches!(outcome.reason(), Some(Error::MalformedPayload(_))));
}

#[test]
fn history_failure_keeps_balance() {
    let mut mock = MockTransport::new();
    mock.push_ok("{}");
    mock.push_ok(blocks_body(&[attribute_block(320)]));
    mock.push_ok(blocks_body(&[vec![0; 16]]));
    mock.push_response(HttpResponse::new(503, "Service Unavailable", ""));
    let mut reader = mock_reader(mock, StationTable::new()).unwrap();

    let outcome = reader.read(&sample_identity());
    assert!(outcome.is_complete());
    let record = outcome.record();
    assert_eq!(record.balance().unwrap().balance, Some(320));
    assert!(record.history().is_empty());

    let diag: Value = serde_json::from_str(record.diagnostics()).unwrap();
    assert!(diag["warnings"][0].as_str().unwrap().contains("503"));
}

#[test]
fn issue_failure_only_drops_issue() {
    let mut mock = MockTransport::new();
    mock.push_ok("{}");
    mock.push_ok(blocks_body(&[attribute_block(10)]));
    mock.push_ok(r#"{"unexpected":true}"#);
    mock.push_ok(blocks_body(&[]));
    let mut reader = mock_reader(mock, StationTable::new()).unwrap();

    let record = reader.read(&sample_identity()).into_record();
    assert_eq!(record.balance().unwrap().balance, Some(10));
    assert!(record.issue().is_none());
}

#[test]
fn every_session_starts_with_a_fresh_handshake() {
    let mut mock = MockTransport::new();
    mock.push_response(HttpResponse::new(401, "Unauthorized", ""));
    mock.push_ok("{}");
    mock.push_ok(blocks_body(&[attribute_block(77)]));
    mock.push_ok(blocks_body(&[]));
    mock.push_ok(blocks_body(&[]));
    let mut reader = mock_reader(mock, StationTable::new()).unwrap();

    assert!(!reader.read(&sample_identity()).is_complete());
    let second = reader.read(&sample_identity());
    assert!(second.is_complete());
    assert_eq!(second.record().balance().unwrap().balance, Some(77));
    assert_eq!(
        reader.client().transport().sent_paths(),
        vec![
            "/api/mutual_authentication",
            "/api/mutual_authentication",
            "/api/read_blocks",
            "/api/read_blocks",
            "/api/read_blocks",
        ]
    );
}
