// felica-relay/src/card/mod.rs
//! Card data: the assembled record types, the pure block decoder and the
//! station lookup it depends on.

pub mod decode;
pub mod record;
pub mod station;

pub use record::{
    BalanceInfo, CardRecord, CommuterPassInfo, IssueInfo, TransactionRecord, TransactionType,
};
pub use station::{StationResolver, StationTable, unknown_station};
