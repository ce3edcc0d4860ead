// felica-relay/src/transport/mock.rs

use crate::transport::traits::{HttpRequest, HttpResponse, Transport};
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent requests and returns
/// queued outcomes in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<HttpRequest>,
    pub responses: Vec<Result<HttpResponse>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: HttpResponse) {
        self.responses.push(Ok(resp));
    }

    /// Queue a 200 response carrying `body`.
    pub fn push_ok(&mut self, body: impl Into<String>) {
        self.push_response(HttpResponse::new(200, "OK", body));
    }

    /// Queue a transport-level failure (no response at all).
    pub fn push_failure(&mut self, message: impl Into<String>) {
        self.responses.push(Err(Error::transport(message)));
    }

    /// Paths (`/api/...`) of the requests sent so far, in order.
    pub fn sent_paths(&self) -> Vec<String> {
        self.sent
            .iter()
            .map(|r| match r.url.find("/api/") {
                Some(i) => r.url[i..].to_string(),
                None => r.url.clone(),
            })
            .collect()
    }
}

impl Transport for MockTransport {
    fn post(&mut self, request: &HttpRequest) -> Result<HttpResponse> {
        self.sent.push(request.clone());
        if self.responses.is_empty() {
            Err(Error::transport("mock transport: no queued response"))
        } else {
            self.responses.remove(0)
        }
    }
}
