// felica-relay/src/transport/http.rs

use crate::transport::traits::{HttpRequest, HttpResponse, Transport};
use crate::{Error, Result};

/// Blocking HTTP transport backed by reqwest.
///
/// Timeouts are whatever the underlying client was built with; the
/// default client uses reqwest's own default.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("felica-relay/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::transport(format!("http client build failed: {}", e)))?;
        Ok(Self { client })
    }

    /// Use a caller-configured client (custom timeout, proxy, TLS roots...).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn post(&mut self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .post(&request.url)
            .body(request.body.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let resp = builder
            .send()
            .map_err(|e| Error::transport(format!("request to {} failed: {}", request.url, e)))?;

        let status = resp.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = resp
            .text()
            .map_err(|e| Error::transport(format!("reading body from {} failed: {}", request.url, e)))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
