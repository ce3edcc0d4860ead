// felica-relay/src/card/record.rs

use serde::Serialize;

use crate::types::CardIdentity;

/// Balance read from the attribute block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceInfo {
    pub balance: Option<u16>,
    pub card_type: String,
}

/// Kind of a history entry (byte 0 of a history block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum TransactionType {
    Rail,
    Bus,
    Purchase,
    Charge,
    Unknown,
}

impl TransactionType {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Rail,
            2 => Self::Bus,
            3 => Self::Purchase,
            4 => Self::Charge,
            _ => Self::Unknown,
        }
    }
}

/// One decoded history slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    pub date: Option<String>,
    pub time: Option<String>,
    pub transaction_type: TransactionType,
    pub entry_station: Option<String>,
    pub exit_station: Option<String>,
    /// Balance left on the card after this transaction.
    pub balance: Option<u16>,
}

/// Issue information. The block layout is not decoded yet, so every field
/// stays `None`; presence of the struct only says the block was readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueInfo {
    pub owner_name: Option<String>,
    pub issued_at: Option<String>,
    pub expires_at: Option<String>,
}

/// Commuter pass validity. Not decoded yet; never present on a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommuterPassInfo {
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
}

/// Everything one read session learned about a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardRecord {
    identity: CardIdentity,
    balance: Option<BalanceInfo>,
    issue: Option<IssueInfo>,
    history: Vec<TransactionRecord>,
    commuter_pass: Option<CommuterPassInfo>,
    diagnostics: String,
}

impl CardRecord {
    pub(crate) fn new(
        identity: CardIdentity,
        balance: Option<BalanceInfo>,
        issue: Option<IssueInfo>,
        history: Vec<TransactionRecord>,
        diagnostics: String,
    ) -> Self {
        Self {
            identity,
            balance,
            issue,
            history,
            commuter_pass: None,
            diagnostics,
        }
    }

    /// Record carrying nothing but the identity and a diagnostics note.
    pub(crate) fn identity_only(identity: CardIdentity, diagnostics: String) -> Self {
        Self::new(identity, None, None, Vec::new(), diagnostics)
    }

    pub fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    pub fn balance(&self) -> Option<&BalanceInfo> {
        self.balance.as_ref()
    }

    pub fn issue(&self) -> Option<&IssueInfo> {
        self.issue.as_ref()
    }

    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    pub fn commuter_pass(&self) -> Option<&CommuterPassInfo> {
        self.commuter_pass.as_ref()
    }

    /// Pretty-printed JSON describing how the read went.
    pub fn diagnostics(&self) -> &str {
        &self.diagnostics
    }
}
