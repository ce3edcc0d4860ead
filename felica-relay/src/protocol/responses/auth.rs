// felica-relay/src/protocol/responses/auth.rs

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Decode a mutual-authentication response body.
///
/// Any JSON object is accepted verbatim; the fields are never interpreted
/// beyond being kept for diagnostics.
pub fn decode_mutual_authentication(body: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(fields) => Ok(fields),
        other => Err(Error::malformed(format!(
            "authentication response is not a json object: {}",
            json_kind(&other)
        ))),
    }
}

pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Successful handshake result, kept only for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationOutcome {
    fields: Map<String, Value>,
    request: String,
    raw_response: String,
}

impl AuthenticationOutcome {
    pub fn new(fields: Map<String, Value>, request: String, raw_response: String) -> Self {
        Self {
            fields,
            request,
            raw_response,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The JSON body that was sent.
    pub fn request(&self) -> &str {
        &self.request
    }

    /// The body exactly as the server returned it.
    pub fn raw_response(&self) -> &str {
        &self.raw_response
    }

    /// Server fields plus `request` and `raw_response`, as one JSON object.
    pub fn to_json(&self) -> Value {
        let mut merged = self.fields.clone();
        merged.insert("request".into(), Value::String(self.request.clone()));
        merged.insert(
            "raw_response".into(),
            Value::String(self.raw_response.clone()),
        );
        Value::Object(merged)
    }
}
