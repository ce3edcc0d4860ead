//! Test support helpers intended for use by unit and integration tests.
//!
//! These centralize the canned server replies and card identities so tests
//! across the crate and the tests/ directory build sessions the same way.
#![allow(dead_code)]

use crate::card::StationTable;
use crate::config::Settings;
use crate::reader::CardReader;
use crate::transport::MockTransport;
use crate::types::{CardIdentity, Idm, Pmm, SystemCode};
use crate::Result;

/// IDm/PMm pair of a typical mobile transit card.
#[doc(hidden)]
pub fn sample_identity() -> CardIdentity {
    CardIdentity::new(
        Idm::from_bytes([0x01, 0x2E, 0x4C, 0x01, 0x02, 0x03, 0x04, 0x05]),
        Pmm::from_bytes([0x10, 0x0B, 0x4B, 0x42, 0x84, 0x85, 0xD0, 0xFF]),
        SystemCode::SUICA,
    )
}

/// JSON body of a block-read reply carrying `blocks` as hex.
#[doc(hidden)]
pub fn blocks_body(blocks: &[Vec<u8>]) -> String {
    let hex: Vec<String> = blocks.iter().map(|b| crate::utils::bytes_to_hex(b)).collect();
    serde_json::json!({ "blocks": hex }).to_string()
}

/// Queue the four replies of a successful session: handshake, attribute,
/// issue and history reads.
#[doc(hidden)]
pub fn seed_session(
    mock: &mut MockTransport,
    attribute: &[Vec<u8>],
    issue: &[Vec<u8>],
    history: &[Vec<u8>],
) {
    mock.push_ok(r#"{"result":"authenticated"}"#);
    mock.push_ok(blocks_body(attribute));
    mock.push_ok(blocks_body(issue));
    mock.push_ok(blocks_body(history));
}

/// A reader over `mock` with a fixed test server and the given stations.
#[doc(hidden)]
pub fn mock_reader(
    mock: MockTransport,
    stations: StationTable,
) -> Result<CardReader<MockTransport, StationTable>> {
    let settings = Settings::new("https://auth.test.example", Some("test-token".into()))?;
    Ok(CardReader::new(mock, settings, stations))
}
