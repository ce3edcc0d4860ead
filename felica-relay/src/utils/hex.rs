//! Hexadecimal helpers for the block payloads and card identifiers.
//!
//! Block payloads arrive from the server as hex strings; identifiers are sent
//! as uppercase hex. Both directions go through the `hex` crate so that odd
//! lengths and stray characters are rejected uniformly.

use crate::Result;

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parse a compact hex string (either case) into bytes.
///
/// Fails with `MalformedPayload` on odd length or non-hex characters.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s)?)
}
