// felica-relay/src/transport/traits.rs

use crate::Result;

/// An immutable, fully built HTTP POST request.
///
/// Produced by the client's request builder; transports only execute it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back from the server, before any status interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase for `status` (may be empty).
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait abstracts HTTP I/O away from the client logic.
///
/// Implementations return `Ok` for any response the server produced,
/// including non-2xx ones; `Err(Error::Network { status_code: None, .. })`
/// is reserved for requests that never got a response.
pub trait Transport {
    fn post(&mut self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post(&mut self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).post(request)
    }
}
