// felica-relay/src/protocol/commands/read.rs

use serde::Serialize;

use crate::Result;
use crate::types::ServiceCode;

/// Body of `POST /api/read_blocks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadBlocksRequest {
    pub service_code: u16,
    pub block_numbers: Vec<u16>,
}

/// Encode a block-read request for one service.
pub fn encode_read_blocks(service_code: ServiceCode, block_numbers: &[u16]) -> Result<String> {
    let body = ReadBlocksRequest {
        service_code: service_code.as_u16(),
        block_numbers: block_numbers.to_vec(),
    };
    Ok(serde_json::to_string(&body)?)
}
