// felica-relay/src/card/station.rs
//! Station name lookup.

use std::collections::HashMap;
use std::io::BufRead;

/// Turns a (line, station) code pair into a display string. Never fails:
/// unknown pairs get a deterministic fallback.
pub trait StationResolver {
    fn resolve(&self, line_code: u8, station_code: u8) -> String;
}

impl<T: StationResolver + ?Sized> StationResolver for &T {
    fn resolve(&self, line_code: u8, station_code: u8) -> String {
        (**self).resolve(line_code, station_code)
    }
}

/// Display string for a pair missing from the table.
pub fn unknown_station(line_code: u8, station_code: u8) -> String {
    format!("Unknown station ({}-{})", line_code, station_code)
}

/// Read-only station table, usually loaded once from a bundled CSV.
///
/// CSV layout: a header row, then `line_code,station_code,company_name,station_name`.
#[derive(Debug, Clone, Default)]
pub struct StationTable {
    names: HashMap<(u8, u8), String>,
}

impl StationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, line_code: u8, station_code: u8, name: impl Into<String>) {
        self.names.insert((line_code, station_code), name.into());
    }

    pub fn from_csv_str(csv: &str) -> Self {
        let mut table = Self::new();
        for line in csv.lines().skip(1) {
            table.load_row(line);
        }
        table
    }

    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut table = Self::new();
        for line in reader.lines().skip(1) {
            table.load_row(&line?);
        }
        Ok(table)
    }

    // Short or non-numeric rows are skipped.
    fn load_row(&mut self, line: &str) {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 4 {
            return;
        }
        let (Ok(line_code), Ok(station_code)) = (parts[0].parse::<u8>(), parts[1].parse::<u8>())
        else {
            log::debug!("skipping station row: {:?}", line);
            return;
        };
        let name = if parts[2].is_empty() {
            parts[3].to_string()
        } else {
            format!("{} {}", parts[2], parts[3])
        };
        self.insert(line_code, station_code, name);
    }

    pub fn get(&self, line_code: u8, station_code: u8) -> Option<&str> {
        self.names.get(&(line_code, station_code)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl StationResolver for StationTable {
    fn resolve(&self, line_code: u8, station_code: u8) -> String {
        self.get(line_code, station_code)
            .map(str::to_string)
            .unwrap_or_else(|| unknown_station(line_code, station_code))
    }
}
