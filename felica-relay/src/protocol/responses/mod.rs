// felica-relay/src/protocol/responses/mod.rs

pub mod auth;
pub mod read;

pub use auth::{AuthenticationOutcome, decode_mutual_authentication};
pub use read::decode_read_blocks;
