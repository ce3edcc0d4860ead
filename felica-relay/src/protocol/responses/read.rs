// felica-relay/src/protocol/responses/read.rs

use serde_json::Value;

use super::auth::json_kind;
use crate::utils::parse_hex;
use crate::{Error, Result};

/// Decode a block-read response body: `{"blocks": ["<hex>", ...]}`.
///
/// Blocks come back in the order the server listed them. The array may be
/// shorter than the request; that is passed through untouched.
pub fn decode_read_blocks(body: &str) -> Result<Vec<Vec<u8>>> {
    let value: Value = serde_json::from_str(body)?;
    let blocks = value
        .get("blocks")
        .ok_or_else(|| Error::malformed("missing `blocks` in read response"))?
        .as_array()
        .ok_or_else(|| Error::malformed("`blocks` is not an array"))?;

    blocks
        .iter()
        .enumerate()
        .map(|(i, b)| match b {
            Value::String(s) => parse_hex(s).map_err(|e| match e {
                Error::MalformedPayload(msg) => {
                    Error::MalformedPayload(format!("block {}: {}", i, msg))
                }
                other => other,
            }),
            other => Err(Error::malformed(format!(
                "block {} is a {}, expected a hex string",
                i,
                json_kind(other)
            ))),
        })
        .collect()
}
