// felica-relay/src/prelude.rs

pub use crate::card::{
    BalanceInfo, CardRecord, CommuterPassInfo, IssueInfo, StationResolver, StationTable,
    TransactionRecord, TransactionType,
};
pub use crate::client::AuthClient;
pub use crate::config::{Settings, SettingsProvider};
pub use crate::reader::{CardReader, ReadOutcome};
pub use crate::tag::Transceiver;
pub use crate::transport::Transport;
#[cfg(feature = "http")]
pub use crate::transport::ReqwestTransport;
pub use crate::{CardIdentity, Error, Idm, Pmm, Result, ServiceCode, SystemCode};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, parse_hex};
