use crate::common::helpers::sample_identity;
use felica_relay::Error;
use felica_relay::client::AuthClient;
use felica_relay::config::Settings;
use felica_relay::constants::{AREA_NODE_IDS, SERVICE_NODE_IDS};
use felica_relay::transport::{HttpResponse, MockTransport};
use felica_relay::types::ServiceCode;

fn client(mock: MockTransport, token: Option<&str>) -> AuthClient<MockTransport> {
    let settings = Settings::new("https://auth.example.com/", token.map(str::to_string)).unwrap();
    AuthClient::new(mock, settings)
}

#[test]
fn authenticate_keeps_request_and_raw_response() {
    let mut mock = MockTransport::new();
    mock.push_ok(r#"{ "session": "abc" }"#);
    let mut c = client(mock, Some("tok"));

    let outcome = c
        .authenticate(&sample_identity(), &AREA_NODE_IDS, &SERVICE_NODE_IDS)
        .unwrap();
    assert_eq!(outcome.fields()["session"], "abc");
    assert_eq!(outcome.raw_response(), r#"{ "session": "abc" }"#);
    assert_eq!(outcome.request(), c.transport().sent[0].body);
    assert_eq!(
        c.transport().sent[0].url,
        "https://auth.example.com/api/mutual_authentication"
    );
}

#[test]
fn status_and_reason_are_reported() {
    let mut mock = MockTransport::new();
    mock.push_response(HttpResponse::new(403, "Forbidden", "nope"));
    let mut c = client(mock, Some("tok"));

    let err = c.read_blocks(ServiceCode::HISTORY, &[0, 1]).unwrap_err();
    assert_eq!(
        err,
        Error::Network {
            status_code: Some(403),
            status_message: "Forbidden".into(),
        }
    );
}

#[test]
fn missing_blocks_field_is_malformed() {
    let mut mock = MockTransport::new();
    mock.push_ok(r#"{"data":[]}"#);
    let mut c = client(mock, None);
    assert!(matches!(
        c.read_blocks(ServiceCode::ATTRIBUTE, &[0]),
        Err(Error::MalformedPayload(_))
    ));
}
