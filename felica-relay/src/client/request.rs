// felica-relay/src/client/request.rs

use crate::config::ServerUrl;
use crate::transport::HttpRequest;

/// Builds immutable requests against one server with one optional token.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    base: &'a ServerUrl,
    bearer_token: Option<&'a str>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(base: &'a ServerUrl, bearer_token: Option<&'a str>) -> Self {
        Self { base, bearer_token }
    }

    /// JSON POST to `path` carrying `body`, with the bearer header only
    /// when a token is configured.
    pub fn build(&self, path: &str, body: String) -> HttpRequest {
        let auth = self
            .bearer_token
            .map(|token| ("Authorization".to_string(), format!("Bearer {}", token)));

        let headers = [
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ]
        .into_iter()
        .chain(auth)
        .collect();

        HttpRequest {
            url: self.base.endpoint(path),
            headers,
            body,
        }
    }
}
