// felica-relay/src/tag/polling.rs

use super::parser;
use crate::constants::{NFCF_CMD_POLLING, NFCF_POLLING_RESP_MIN_LEN, NFCF_RESP_POLLING};
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// Encode a length-prefixed Polling frame.
/// Layout: len(1) + command(1) + system_code(2, big-endian) + request_code(1) + time_slot(1)
pub fn encode_polling(system_code: SystemCode) -> Vec<u8> {
    let sc = system_code.to_be_bytes();
    vec![
        0x06, // total length including this byte
        NFCF_CMD_POLLING,
        sc[0],
        sc[1],
        0x00, // no request data
        0x00, // single time slot
    ]
}

/// Decode a length-prefixed Polling response.
/// Layout: len(1) + response_code(1) + idm(8) + pmm(8) [+ request data]
pub fn decode_polling(data: &[u8]) -> Result<(Idm, Pmm)> {
    parser::ensure_len(data, NFCF_POLLING_RESP_MIN_LEN)?;
    parser::expect_code_at(data, 1, NFCF_RESP_POLLING)?;

    let idm = parser::idm_at(data, 2)?;
    let pmm = parser::pmm_at(data, 10)?;
    Ok((idm, pmm))
}
