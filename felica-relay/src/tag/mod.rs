// felica-relay/src/tag/mod.rs
//! Card identity from the radio side.
//!
//! The radio link itself belongs to the platform; this module only speaks
//! the NFC-F Polling exchange over whatever [`Transceiver`] the platform
//! hands in, and turns the answer into a [`CardIdentity`].

pub mod mock;
pub mod parser;
pub mod polling;

pub use mock::MockTransceiver;
pub use polling::{decode_polling, encode_polling};

use crate::constants::SYSTEM_CODE;
use crate::types::CardIdentity;
use crate::{Error, Result};

/// Raw NFC-F frame exchange with a card in the field.
pub trait Transceiver {
    /// Send one length-prefixed frame and return the card's reply.
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>>;
}

impl<T: Transceiver + ?Sized> Transceiver for &mut T {
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(frame)
    }
}

/// Poll the card for the transit system code and return its identity.
///
/// Every failure is reported as `UnsupportedCard`: a card that does not
/// answer polling for this system cannot be read at all.
pub fn read_identity<T: Transceiver + ?Sized>(transceiver: &mut T) -> Result<CardIdentity> {
    let cmd = encode_polling(SYSTEM_CODE);
    log::debug!("polling for system {}: {}", SYSTEM_CODE, crate::utils::bytes_to_hex(&cmd));

    let resp = transceiver
        .transceive(&cmd)
        .map_err(|e| Error::UnsupportedCard(format!("polling failed: {}", e)))?;
    log::debug!("polling response: {}", crate::utils::bytes_to_hex(&resp));

    let (idm, pmm) = decode_polling(&resp)
        .map_err(|e| Error::UnsupportedCard(format!("unexpected polling response: {}", e)))?;

    Ok(CardIdentity::new(idm, pmm, SYSTEM_CODE))
}
