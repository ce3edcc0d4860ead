// Read one card through the authentication server and print the result.
//
// The identity normally comes from the platform's NFC stack; here it is
// taken from the command line (IDm and PMm as hex) or a built-in sample:
//
//     FELICA_AUTH_TOKEN=... cargo run --example read_card -- 012E4C0102030405 100B4B428485D0FF
//
// Set STATIONS_CSV to a `line_code,station_code,company_name,station_name`
// file to get station names instead of raw codes.

use std::fs::File;
use std::io::BufReader;

use felica_relay::prelude::*;

fn parse_identity(args: &[String]) -> anyhow::Result<CardIdentity> {
    let (idm, pmm) = match args {
        [idm, pmm, ..] => (idm.as_str(), pmm.as_str()),
        _ => ("012E4C0102030405", "100B4B428485D0FF"),
    };
    let idm = Idm::try_from(parse_hex(idm)?.as_slice())?;
    let pmm = Pmm::try_from(parse_hex(pmm)?.as_slice())?;
    Ok(CardIdentity::new(idm, pmm, SystemCode::SUICA))
}

fn load_stations() -> anyhow::Result<StationTable> {
    match std::env::var("STATIONS_CSV") {
        Ok(path) => Ok(StationTable::from_reader(BufReader::new(File::open(path)?))?),
        Err(_) => Ok(StationTable::new()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let identity = parse_identity(&args)?;
    let stations = load_stations()?;
    println!("Loaded {} stations", stations.len());

    let settings = Settings::from_env()?;
    println!("Server: {}", settings.server_base_url());
    let mut reader = CardReader::from_settings(&settings, stations)?;

    let outcome = reader.read(&identity);
    if let Some(reason) = outcome.reason() {
        println!("Authentication failed, identity only: {}", reason);
    }

    let record = outcome.into_record();
    println!("IDm = {}", record.identity().idm().to_hex());
    match record.balance() {
        Some(b) => println!("Balance = {:?} ({})", b.balance, b.card_type),
        None => println!("Balance unavailable"),
    }
    for (i, h) in record.history().iter().enumerate() {
        println!(
            "  #{:02} {} {} {:<8} {} -> {} (balance {:?})",
            i,
            h.date.as_deref().unwrap_or("-"),
            h.time.as_deref().unwrap_or("-"),
            h.transaction_type.to_string(),
            h.entry_station.as_deref().unwrap_or("-"),
            h.exit_station.as_deref().unwrap_or("-"),
            h.balance
        );
    }
    println!("\nDiagnostics:\n{}", record.diagnostics());
    Ok(())
}
