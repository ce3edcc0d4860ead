// fixtures.rs: commonly used blocks, station tables and replies

use felica_relay::card::StationTable;

pub const STATION_CSV: &str = "line_code,station_code,company_name,station_name
1,1,JR East,Tokyo
1,2,JR East,Kanda
231,7,,Shinjuku-sanchome
";

pub fn stations() -> StationTable {
    StationTable::from_csv_str(STATION_CSV)
}

/// Attribute block whose first two bytes hold `balance` (little-endian).
pub fn attribute_block(balance: u16) -> Vec<u8> {
    let mut b = vec![0u8; 16];
    b[..2].copy_from_slice(&balance.to_le_bytes());
    b
}

/// History block laid out as on the card.
pub fn history_block(
    kind: u8,
    days: u16,
    (hour, minute): (u16, u16),
    entry: (u8, u8),
    exit: (u8, u8),
    balance: u16,
) -> Vec<u8> {
    let mut b = vec![0u8; 16];
    b[0] = kind;
    b[4..6].copy_from_slice(&days.to_be_bytes());
    b[6..8].copy_from_slice(&((hour << 11) | (minute << 5)).to_be_bytes());
    b[8] = entry.0;
    b[9] = entry.1;
    b[10] = exit.0;
    b[11] = exit.1;
    b[14..16].copy_from_slice(&balance.to_le_bytes());
    b
}

/// Length-prefixed polling reply carrying the sample identity.
pub fn polling_reply() -> Vec<u8> {
    let mut r = vec![0x12, 0x01];
    r.extend_from_slice(&[0x01, 0x2E, 0x4C, 0x01, 0x02, 0x03, 0x04, 0x05]);
    r.extend_from_slice(&[0x10, 0x0B, 0x4B, 0x42, 0x84, 0x85, 0xD0, 0xFF]);
    r
}
