// felica-relay/src/lib.rs

//! felica-relay
//!
//! Read a FeliCa transit card's balance and travel history by relaying the
//! mutual-authentication handshake and block reads to a remote server, then
//! decoding the returned blocks.
//!
//! ```no_run
//! use felica_relay::prelude::*;
//!
//! # fn main() -> felica_relay::Result<()> {
//! let stations = StationTable::from_csv_str("line_code,station_code,company_name,station_name\n");
//! let mut reader = CardReader::from_settings(&Settings::from_env()?, stations)?;
//! let identity = CardIdentity::new(
//!     Idm::from_bytes([0x01, 0x2E, 0x4C, 0x01, 0x02, 0x03, 0x04, 0x05]),
//!     Pmm::from_bytes([0x10, 0x0B, 0x4B, 0x42, 0x84, 0x85, 0xD0, 0xFF]),
//!     SystemCode::SUICA,
//! );
//! let record = reader.read(&identity).into_record();
//! println!("{:?}", record.balance());
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

pub mod card;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available everywhere.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
