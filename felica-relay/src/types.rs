// felica-relay/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Uppercase hex, as sent to the authentication server.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(eight_bytes(bytes)?))
    }
}

/// PMm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pmm([u8; 8]);

impl Pmm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(eight_bytes(bytes)?))
    }
}

fn eight_bytes(bytes: &[u8]) -> Result<[u8; 8], Error> {
    if bytes.len() != 8 {
        return Err(Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; 8];
    arr.copy_from_slice(bytes);
    Ok(arr)
}

/// SystemCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{:04X}", _0)]
pub struct SystemCode(u16);

impl SystemCode {
    pub const SUICA: Self = Self(0x0003);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// NFC-F frames carry the system code big-endian.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// ServiceCode as addressed by the block-read endpoint.
///
/// The remote server maps these short codes onto the card's service
/// nodes, so they are plain small integers rather than FeliCa node codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub struct ServiceCode(u16);

impl ServiceCode {
    pub const ISSUE: Self = Self(1);
    pub const ATTRIBUTE: Self = Self(2);
    pub const HISTORY: Self = Self(8);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

/// Identity of the card in the field, handed over by the tag layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CardIdentity {
    #[serde(serialize_with = "hex_idm")]
    pub idm: Idm,
    #[serde(serialize_with = "hex_pmm")]
    pub pmm: Pmm,
    #[serde(serialize_with = "hex_system_code")]
    pub system_code: SystemCode,
}

impl CardIdentity {
    pub fn new(idm: Idm, pmm: Pmm, system_code: SystemCode) -> Self {
        Self {
            idm,
            pmm,
            system_code,
        }
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }

    pub fn system_code(&self) -> SystemCode {
        self.system_code
    }
}

fn hex_idm<S: serde::Serializer>(idm: &Idm, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&idm.to_hex())
}

fn hex_pmm<S: serde::Serializer>(pmm: &Pmm, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&pmm.to_hex())
}

fn hex_system_code<S: serde::Serializer>(sc: &SystemCode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&sc.to_string())
}
