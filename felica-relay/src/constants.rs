// felica-relay/src/constants.rs
//! Fixed identifiers and layout constants shared across the crate

use crate::types::SystemCode;

/// System code of the only card family this crate reads.
pub const SYSTEM_CODE: SystemCode = SystemCode::SUICA;

/// Area node ids scoping the mutual-authentication handshake.
pub const AREA_NODE_IDS: [u16; 5] = [0x0000, 0x0040, 0x0800, 0x0FC0, 0x1000];

/// Service node ids scoping the mutual-authentication handshake.
pub const SERVICE_NODE_IDS: [u16; 9] = [
    0x0048, 0x0088, 0x0810, 0x08C8, 0x090C, 0x1008, 0x1048, 0x108C, 0x10C8,
];

/// Nominal size of a card memory block.
pub const BLOCK_LEN: usize = 16;

/// Number of history slots read in one batched request.
pub const HISTORY_SLOTS: u16 = 20;

pub const MUTUAL_AUTHENTICATION_PATH: &str = "/api/mutual_authentication";
pub const READ_BLOCKS_PATH: &str = "/api/read_blocks";

/// NFC-F polling command / response codes
pub const NFCF_CMD_POLLING: u8 = 0x00;
pub const NFCF_RESP_POLLING: u8 = 0x01;

/// Minimal length of a length-prefixed polling response (len + code + IDm + PMm)
pub const NFCF_POLLING_RESP_MIN_LEN: usize = 18;
