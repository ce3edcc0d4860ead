// felica-relay/src/protocol/commands/auth.rs

use serde::Serialize;

use crate::Result;
use crate::types::CardIdentity;

/// Body of `POST /api/mutual_authentication`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutualAuthenticationRequest {
    pub system_code: u16,
    pub areas: Vec<u16>,
    pub services: Vec<u16>,
    pub idm: String,
    pub pmm: String,
}

impl MutualAuthenticationRequest {
    pub fn new(identity: &CardIdentity, areas: &[u16], services: &[u16]) -> Self {
        Self {
            system_code: identity.system_code().as_u16(),
            areas: areas.to_vec(),
            services: services.to_vec(),
            idm: identity.idm().to_hex(),
            pmm: identity.pmm().to_hex(),
        }
    }
}

/// Encode the mutual-authentication request as a single JSON object.
pub fn encode_mutual_authentication(
    identity: &CardIdentity,
    areas: &[u16],
    services: &[u16],
) -> Result<String> {
    let body = MutualAuthenticationRequest::new(identity, areas, services);
    Ok(serde_json::to_string(&body)?)
}
