// felica-relay/src/card/decode.rs
//! Pure decoders for the fixed-layout card blocks.
//!
//! Nothing here fails: bytes that cannot be interpreted become `None`,
//! `TransactionType::Unknown` or the `"unknown"` date, so a partly damaged
//! card still yields whatever could be read.
//!
//! History block layout (16 bytes):
//!
//! | bytes | field                                   |
//! |-------|-----------------------------------------|
//! | 0     | transaction type                        |
//! | 4–5   | days since 2000-01-01 (big-endian)      |
//! | 6–7   | hour:5 minute:6 unused:5 (big-endian)   |
//! | 8–9   | entry line / station code               |
//! | 10–11 | exit line / station code                |
//! | 14–15 | balance after transaction (little-endian) |

use chrono::{Days, NaiveDate};

use super::record::{BalanceInfo, CommuterPassInfo, IssueInfo, TransactionRecord, TransactionType};
use super::station::StationResolver;
use crate::constants::BLOCK_LEN;

/// Sentinel for a date that cannot be represented.
pub const UNKNOWN_DATE: &str = "unknown";

pub const CARD_TYPE_SUICA: &str = "Suica";
pub const CARD_TYPE_UNKNOWN: &str = "Unknown";

/// Little-endian balance from the first two bytes of the attribute block.
pub fn decode_balance(block: &[u8]) -> Option<u16> {
    match block {
        [lo, hi, ..] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    }
}

/// Balance plus the card type derived from it.
pub fn decode_balance_info(block: Option<&[u8]>) -> BalanceInfo {
    let balance = block.and_then(decode_balance);
    let card_type = if balance.is_some() {
        CARD_TYPE_SUICA
    } else {
        CARD_TYPE_UNKNOWN
    };
    BalanceInfo {
        balance,
        card_type: card_type.to_string(),
    }
}

/// `YYYY-MM-DD` for a day offset from 2000-01-01.
pub fn decode_date(days: u16) -> String {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|epoch| epoch.checked_add_days(Days::new(u64::from(days))))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// `HH:MM` from the packed time field; the low five bits are unused.
pub fn decode_time(value: u16) -> String {
    let hour = (value >> 11) & 0x1F;
    let minute = (value >> 5) & 0x3F;
    format!("{:02}:{:02}", hour, minute)
}

/// Resolve a station code pair. A zero line or station code means the slot
/// has no station; such pairs are never looked up.
pub fn decode_station<R: StationResolver + ?Sized>(
    line_code: u8,
    station_code: u8,
    resolver: &R,
) -> Option<String> {
    if line_code == 0 || station_code == 0 {
        return None;
    }
    Some(resolver.resolve(line_code, station_code))
}

/// Decode one history block, or `None` if it is shorter than a full block.
pub fn decode_history_block<R: StationResolver + ?Sized>(
    block: &[u8],
    resolver: &R,
) -> Option<TransactionRecord> {
    if block.len() < BLOCK_LEN {
        return None;
    }

    let be = |i: usize| u16::from_be_bytes([block[i], block[i + 1]]);

    Some(TransactionRecord {
        date: Some(decode_date(be(4))),
        time: Some(decode_time(be(6))),
        transaction_type: TransactionType::from_code(block[0]),
        entry_station: decode_station(block[8], block[9], resolver),
        exit_station: decode_station(block[10], block[11], resolver),
        balance: Some(u16::from_le_bytes([block[14], block[15]])),
    })
}

/// Decode every full history block in read order, skipping short ones.
pub fn decode_history<R: StationResolver + ?Sized>(
    blocks: &[Vec<u8>],
    resolver: &R,
) -> Vec<TransactionRecord> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(slot, block)| {
            let record = decode_history_block(block, resolver);
            if record.is_none() {
                log::debug!(
                    "skipping history slot {}: {} bytes, need {}",
                    slot,
                    block.len(),
                    BLOCK_LEN
                );
            }
            record
        })
        .collect()
}

/// Issue block placeholder: the layout is not decoded, so the result only
/// records that the block was available.
pub fn decode_issue_block(_block: &[u8]) -> IssueInfo {
    IssueInfo::default()
}

/// Commuter pass placeholder: always absent.
pub fn decode_commuter_pass(_block: &[u8]) -> Option<CommuterPassInfo> {
    None
}
