// felica-relay/src/protocol/commands/mod.rs

pub mod auth;
pub mod read;

pub use auth::{MutualAuthenticationRequest, encode_mutual_authentication};
pub use read::{ReadBlocksRequest, encode_read_blocks};

use crate::Result;
use crate::constants::{MUTUAL_AUTHENTICATION_PATH, READ_BLOCKS_PATH};
use crate::types::{CardIdentity, ServiceCode};

/// High-level Command enum. Each variant maps to one server endpoint; the
/// per-command encoder lives in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    MutualAuthentication {
        identity: CardIdentity,
        areas: Vec<u16>,
        services: Vec<u16>,
    },
    ReadBlocks {
        service_code: ServiceCode,
        block_numbers: Vec<u16>,
    },
}

impl Command {
    /// Endpoint path relative to the server base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::MutualAuthentication { .. } => MUTUAL_AUTHENTICATION_PATH,
            Self::ReadBlocks { .. } => READ_BLOCKS_PATH,
        }
    }

    /// Encode the command into its JSON request body.
    pub fn encode(&self) -> Result<String> {
        match self {
            Self::MutualAuthentication {
                identity,
                areas,
                services,
            } => encode_mutual_authentication(identity, areas, services),
            Self::ReadBlocks {
                service_code,
                block_numbers,
            } => encode_read_blocks(*service_code, block_numbers),
        }
    }
}
