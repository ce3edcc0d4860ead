// felica-relay/src/reader/mod.rs
//! Card read orchestration.
//!
//! A session walks `Authenticating → ReadingAttributes → ReadingHistory →
//! Assembled`. Only a failed handshake changes the shape of the result (to
//! an identity-only [`ReadOutcome::Degraded`] record); every later failure
//! just leaves the affected field empty.

pub mod diagnostics;

use crate::card::decode::{decode_balance_info, decode_history, decode_issue_block};
use crate::card::{CardRecord, StationResolver};
use crate::client::AuthClient;
use crate::config::Settings;
use crate::constants::{AREA_NODE_IDS, HISTORY_SLOTS, SERVICE_NODE_IDS};
use crate::tag::Transceiver;
use crate::transport::Transport;
use crate::types::{CardIdentity, ServiceCode};
use crate::{Error, Result};

/// Result of one read session. Never an error: a failed handshake still
/// yields a record holding the card identity.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    Complete(CardRecord),
    Degraded { record: CardRecord, reason: Error },
}

impl ReadOutcome {
    pub fn record(&self) -> &CardRecord {
        match self {
            Self::Complete(record) | Self::Degraded { record, .. } => record,
        }
    }

    pub fn into_record(self) -> CardRecord {
        match self {
            Self::Complete(record) | Self::Degraded { record, .. } => record,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Why the session degraded, if it did.
    pub fn reason(&self) -> Option<&Error> {
        match self {
            Self::Complete(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }
}

/// Stages of a read session, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ReadStage {
    Idle,
    Authenticating,
    ReadingAttributes,
    ReadingHistory,
    Assembled,
}

/// Card read orchestrator. Owns the client for one server/token pair and a
/// read-only station resolver.
pub struct CardReader<T: Transport, R: StationResolver> {
    client: AuthClient<T>,
    stations: R,
    stage: ReadStage,
}

#[cfg(feature = "http")]
impl<R: StationResolver> CardReader<crate::transport::ReqwestTransport, R> {
    /// Reader talking HTTP to the server named by `provider`.
    pub fn from_settings<P: crate::config::SettingsProvider + ?Sized>(
        provider: &P,
        stations: R,
    ) -> Result<Self> {
        let settings = provider.settings()?;
        let transport = crate::transport::ReqwestTransport::new()?;
        Ok(Self::new(transport, settings, stations))
    }
}

impl<T: Transport, R: StationResolver> CardReader<T, R> {
    pub fn new(transport: T, settings: Settings, stations: R) -> Self {
        Self {
            client: AuthClient::new(transport, settings),
            stations,
            stage: ReadStage::Idle,
        }
    }

    pub fn client(&self) -> &AuthClient<T> {
        &self.client
    }

    /// Stage reached by the most recent session.
    pub fn stage(&self) -> ReadStage {
        self.stage
    }

    /// Poll the tag for its identity, then read it.
    ///
    /// `UnsupportedCard` is the only error: it means the session should not
    /// start at all.
    pub fn read_tag<X: Transceiver + ?Sized>(&mut self, tag: &mut X) -> Result<ReadOutcome> {
        let identity = crate::tag::read_identity(tag)?;
        Ok(self.read(&identity))
    }

    /// Run one read session for `identity`.
    pub fn read(&mut self, identity: &CardIdentity) -> ReadOutcome {
        self.enter(ReadStage::Authenticating);
        let auth = match self
            .client
            .authenticate(identity, &AREA_NODE_IDS, &SERVICE_NODE_IDS)
        {
            Ok(auth) => auth,
            Err(reason) => {
                log::warn!(
                    "card {}: authentication failed, returning identity only: {}",
                    identity.idm().to_hex(),
                    reason
                );
                let record =
                    CardRecord::identity_only(*identity, diagnostics::failure_report(&reason));
                return ReadOutcome::Degraded { record, reason };
            }
        };

        let mut warnings = Vec::new();

        self.enter(ReadStage::ReadingAttributes);
        let balance = match self.client.read_blocks(ServiceCode::ATTRIBUTE, &[0]) {
            Ok(blocks) => Some(decode_balance_info(blocks.first().map(Vec::as_slice))),
            Err(e) => {
                log::warn!("attribute read failed: {}", e);
                warnings.push(format!("attribute read failed: {}", e));
                None
            }
        };
        let issue = match self.client.read_blocks(ServiceCode::ISSUE, &[0]) {
            Ok(blocks) => blocks.first().map(|b| decode_issue_block(b)),
            Err(e) => {
                log::warn!("issue read failed: {}", e);
                warnings.push(format!("issue read failed: {}", e));
                None
            }
        };

        self.enter(ReadStage::ReadingHistory);
        let slots: Vec<u16> = (0..HISTORY_SLOTS).collect();
        let history = match self.client.read_blocks(ServiceCode::HISTORY, &slots) {
            Ok(blocks) => decode_history(&blocks, &self.stations),
            Err(e) => {
                log::warn!("history read failed, continuing without history: {}", e);
                warnings.push(format!("history read failed: {}", e));
                Vec::new()
            }
        };

        let diagnostics =
            diagnostics::session_report(&auth, balance.as_ref(), &history, &warnings);
        self.enter(ReadStage::Assembled);
        log::info!(
            "card {} read: balance {:?}, {} history entries",
            identity.idm().to_hex(),
            balance.as_ref().and_then(|b| b.balance),
            history.len()
        );

        ReadOutcome::Complete(CardRecord::new(
            *identity,
            balance,
            issue,
            history,
            diagnostics,
        ))
    }

    fn enter(&mut self, stage: ReadStage) {
        log::trace!("read stage {} -> {}", self.stage, stage);
        self.stage = stage;
    }
}
