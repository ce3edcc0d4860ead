// felica-relay/src/config.rs
//! Session settings: which authentication server to talk to and with what
//! credentials.
//!
//! Settings are read once when a reader is built and stay fixed for its
//! lifetime. Where they come from (a preferences store, environment, a
//! config file) is the caller's business; this module only defines the
//! shape, the validation and a couple of stock sources.

use crate::{Error, Result};

/// Server used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "https://felica-auth.nyaa.ws";

pub const ENV_SERVER_URL: &str = "FELICA_AUTH_SERVER_URL";
pub const ENV_AUTH_TOKEN: &str = "FELICA_AUTH_TOKEN";

/// Base URL of the authentication server, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl(String);

impl ServerUrl {
    pub fn new(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref().trim();
        Self::validate(url)?;
        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join an absolute endpoint path (`/api/...`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    fn validate(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(Error::InvalidConfig("server url is empty".into()));
        }
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "server url must start with http:// or https://, got: {}",
                    url
                ))
            })?;
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(Error::InvalidConfig(format!(
                "server url has no valid host: {}",
                url
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settings for one read session.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    server_base_url: ServerUrl,
    bearer_token: Option<String>,
}

impl Settings {
    /// Build settings; a blank token counts as no token.
    pub fn new(server_base_url: impl AsRef<str>, bearer_token: Option<String>) -> Result<Self> {
        Ok(Self {
            server_base_url: ServerUrl::new(server_base_url)?,
            bearer_token: bearer_token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Read `FELICA_AUTH_SERVER_URL` / `FELICA_AUTH_TOKEN`, falling back to
    /// the default server without a token.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(ENV_SERVER_URL).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let token = std::env::var(ENV_AUTH_TOKEN).ok();
        Self::new(url, token)
    }

    pub fn server_base_url(&self) -> &ServerUrl {
        &self.server_base_url
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_base_url: ServerUrl(DEFAULT_SERVER_URL.to_string()),
            bearer_token: None,
        }
    }
}

// The token must never end up in logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("server_base_url", &self.server_base_url)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Source of session settings.
pub trait SettingsProvider {
    fn settings(&self) -> Result<Settings>;
}

impl SettingsProvider for Settings {
    fn settings(&self) -> Result<Settings> {
        Ok(self.clone())
    }
}
