//! Request parameters and the JSON envelope printed on stdout

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::RequestError;

/// Everything needed to issue one request
#[derive(Debug, Clone)]
pub struct RequestParams {
    /// Target URL
    pub url: String,

    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: String,

    /// JSON body; `None` sends no body
    pub payload: Option<Value>,

    /// Request headers in caller order
    pub headers: Vec<(String, String)>,

    /// Upstream proxy URL (HTTP/HTTPS/SOCKS5), used for every scheme
    pub proxy: Option<String>,

    /// Browser profile driving TLS emulation (e.g. "chrome120")
    pub profile: String,
}

/// The single JSON object written to stdout.
///
/// Field order in each variant is the order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    /// The server answered, whatever the status
    Response {
        status_code: u16,
        json: Value,
        text: String,
        headers: BTreeMap<String, String>,
    },
    /// The request could not be completed; `status_code` is always 0
    Failure {
        status_code: u16,
        error: String,
        text: String,
    },
    /// Required arguments were missing
    Rejected { error: String },
}

impl Envelope {
    /// Build a response envelope. `json` is the parsed body, or `{}` when
    /// the body is not JSON (e.g. an HTML challenge page).
    pub fn response(status_code: u16, text: String, headers: BTreeMap<String, String>) -> Self {
        let json = serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Map::new()));
        Envelope::Response {
            status_code,
            json,
            text,
            headers,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Envelope::Failure {
            status_code: 0,
            error: message.clone(),
            text: message,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Envelope::Rejected {
            error: message.into(),
        }
    }

    /// Serialize as one line of JSON.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({"status_code": 0, "error": e.to_string(), "text": e.to_string()})
                .to_string()
        })
    }
}

/// Optional positional argument: absent, empty and "null" all mean "not set".
pub fn non_null_arg(arg: Option<&str>) -> Option<&str> {
    arg.filter(|a| !a.is_empty() && *a != "null")
}

/// Parse a JSON payload argument. JSON `null` means no body.
pub fn parse_payload(raw: &str) -> Result<Option<Value>, RequestError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| RequestError::invalid_request(format!("Invalid payload JSON: {}", e)))?;
    Ok(match value {
        Value::Null => None,
        other => Some(other),
    })
}

/// Parse a headers argument, which must be a JSON object.
///
/// `null` values are dropped; non-string scalars are sent in JSON form.
pub fn parse_headers(raw: &str) -> Result<Vec<(String, String)>, RequestError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| RequestError::invalid_request(format!("Invalid headers JSON: {}", e)))?;

    let Value::Object(map) = value else {
        return Err(RequestError::invalid_request(
            "Headers must be a JSON object",
        ));
    };

    Ok(map
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((name, s)),
            other => Some((name, other.to_string())),
        })
        .collect())
}
