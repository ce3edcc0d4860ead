// felica-relay/src/protocol/mod.rs
//! JSON wire codec for the authentication server.

pub mod commands;
pub mod responses;

pub use commands::*;
pub use responses::*;
