use crate::common::fixtures::{attribute_block, history_block, stations};
use crate::common::helpers::{blocks_body, sample_identity};
use felica_relay::Error;
use felica_relay::config::Settings;
use felica_relay::reader::CardReader;
use mockito::Matcher;
use serde_json::json;

#[test]
fn full_session_over_http() {
    let mut server = mockito::Server::new();
    let auth = server
        .mock("POST", "/api/mutual_authentication")
        .match_header("authorization", "Bearer secret")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "system_code": 3,
            "idm": "012E4C0102030405",
            "pmm": "100B4B428485D0FF",
        })))
        .with_status(200)
        .with_body(r#"{"result":"ok"}"#)
        .create();
    let attribute = server
        .mock("POST", "/api/read_blocks")
        .match_body(Matcher::PartialJson(json!({ "service_code": 2 })))
        .with_status(200)
        .with_body(blocks_body(&[attribute_block(2450)]))
        .create();
    let issue = server
        .mock("POST", "/api/read_blocks")
        .match_body(Matcher::PartialJson(json!({ "service_code": 1 })))
        .with_status(200)
        .with_body(blocks_body(&[vec![0; 16]]))
        .create();
    let history = server
        .mock("POST", "/api/read_blocks")
        .match_body(Matcher::PartialJson(json!({ "service_code": 8 })))
        .with_status(200)
        .with_body(blocks_body(&[history_block(
            0x01,
            9000,
            (7, 15),
            (1, 2),
            (1, 1),
            2450,
        )]))
        .create();

    let settings = Settings::new(server.url(), Some("secret".into())).unwrap();
    let mut reader = CardReader::from_settings(&settings, stations()).unwrap();
    let outcome = reader.read(&sample_identity());

    auth.assert();
    attribute.assert();
    issue.assert();
    history.assert();

    assert!(outcome.is_complete());
    let record = outcome.record();
    assert_eq!(record.balance().unwrap().balance, Some(2450));
    assert_eq!(record.history().len(), 1);
    assert_eq!(record.history()[0].date.as_deref(), Some("2024-08-22"));
    assert_eq!(record.history()[0].entry_station.as_deref(), Some("JR East Kanda"));
    assert_eq!(record.history()[0].exit_station.as_deref(), Some("JR East Tokyo"));
}

#[test]
fn unauthorized_over_http_degrades() {
    let mut server = mockito::Server::new();
    let auth = server
        .mock("POST", "/api/mutual_authentication")
        .with_status(401)
        .with_body(r#"{"detail":"invalid token"}"#)
        .create();
    let reads = server
        .mock("POST", "/api/read_blocks")
        .expect(0)
        .create();

    let settings = Settings::new(server.url(), Some("wrong".into())).unwrap();
    let mut reader = CardReader::from_settings(&settings, stations()).unwrap();
    let outcome = reader.read(&sample_identity());

    auth.assert();
    reads.assert();
    assert!(matches!(
        outcome.reason(),
        Some(Error::Network {
            status_code: Some(401),
            ..
        })
    ));
    assert_eq!(outcome.record().identity(), &sample_identity());
}
