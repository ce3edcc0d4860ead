// felica-relay/src/reader/diagnostics.rs
//! Diagnostics blob embedded in every `CardRecord`.

use serde_json::{Value, json};

use crate::Error;
use crate::card::{BalanceInfo, TransactionRecord};
use crate::protocol::AuthenticationOutcome;

/// Report for a session that got past authentication.
pub fn session_report(
    auth: &AuthenticationOutcome,
    balance: Option<&BalanceInfo>,
    history: &[TransactionRecord],
    warnings: &[String],
) -> String {
    let report = json!({
        "auth_result": auth.to_json(),
        "balance": balance.and_then(|b| b.balance),
        "card_type": balance.map(|b| b.card_type.as_str()),
        "history_count": history.len(),
        "history": history,
        "warnings": warnings,
    });
    render(&report)
}

/// Report for a session that failed before any card data was read.
pub fn failure_report(reason: &Error) -> String {
    render(&json!({ "error": reason.to_string() }))
}

fn render(report: &Value) -> String {
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to render diagnostics: {}\"}}", e))
}
