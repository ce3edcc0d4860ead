// felica-relay/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Non-2xx HTTP status, or the request never produced a response
    /// (`status_code` is `None` in that case).
    #[error("network error: {}", describe_status(.status_code, .status_message))]
    Network {
        status_code: Option<u16>,
        status_message: String,
    },

    #[error("empty response body")]
    EmptyResponse,

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("unsupported card: {0}")]
    UnsupportedCard(String),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn describe_status(status_code: &Option<u16>, status_message: &str) -> String {
    match status_code {
        Some(code) => format!("{} {}", code, status_message),
        None => status_message.to_string(),
    }
}

impl Error {
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Error::Network {
            status_code: None,
            status_message: message.into(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedPayload(message.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedPayload(format!("invalid json: {}", e))
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::MalformedPayload(format!("invalid hex: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
