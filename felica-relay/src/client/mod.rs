// felica-relay/src/client/mod.rs
//! Client for the two server operations: mutual authentication and block
//! reads. One call is one HTTP request; nothing is retried here.

pub mod request;

pub use request::RequestBuilder;

use crate::config::Settings;
use crate::protocol::{AuthenticationOutcome, Command, decode_mutual_authentication, decode_read_blocks};
use crate::transport::Transport;
use crate::types::{CardIdentity, ServiceCode};
use crate::{Error, Result};

/// Authentication & block-read client bound to one server and token.
pub struct AuthClient<T: Transport> {
    transport: T,
    settings: Settings,
}

impl<T: Transport> AuthClient<T> {
    pub fn new(transport: T, settings: Settings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run the mutual-authentication handshake for `identity`, scoped to the
    /// given area and service node ids.
    pub fn authenticate(
        &mut self,
        identity: &CardIdentity,
        areas: &[u16],
        services: &[u16],
    ) -> Result<AuthenticationOutcome> {
        let cmd = Command::MutualAuthentication {
            identity: *identity,
            areas: areas.to_vec(),
            services: services.to_vec(),
        };
        let (request, response) = self.execute(&cmd)?;
        let fields = decode_mutual_authentication(&response)?;
        Ok(AuthenticationOutcome::new(fields, request, response))
    }

    /// Read `block_numbers` of one service. The result follows the server's
    /// `blocks` array and may hold fewer entries than requested.
    pub fn read_blocks(
        &mut self,
        service_code: ServiceCode,
        block_numbers: &[u16],
    ) -> Result<Vec<Vec<u8>>> {
        let cmd = Command::ReadBlocks {
            service_code,
            block_numbers: block_numbers.to_vec(),
        };
        let (_, response) = self.execute(&cmd)?;
        let blocks = decode_read_blocks(&response)?;
        if blocks.len() != block_numbers.len() {
            log::debug!(
                "service {}: asked for {} blocks, server returned {}",
                service_code,
                block_numbers.len(),
                blocks.len()
            );
        }
        Ok(blocks)
    }

    /// Send one command; returns the request body and the non-empty
    /// response body of a 2xx reply.
    fn execute(&mut self, cmd: &Command) -> Result<(String, String)> {
        let body = cmd.encode()?;
        let request = RequestBuilder::new(
            self.settings.server_base_url(),
            self.settings.bearer_token(),
        )
        .build(cmd.path(), body);

        log::debug!("POST {}", request.url);
        let resp = self.transport.post(&request)?;

        if !resp.is_success() {
            log::debug!("POST {} -> {} {}", request.url, resp.status, resp.reason);
            return Err(Error::Network {
                status_code: Some(resp.status),
                status_message: resp.reason,
            });
        }
        if resp.body.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }

        Ok((request.body, resp.body))
    }
}
