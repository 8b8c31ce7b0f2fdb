//! Error types and error codes for a single request

use std::fmt;

use crate::models::Envelope;

/// Error categories, logged alongside the failure envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Connection or request timeout
    Timeout,
    /// DNS resolution failed
    DnsError,
    /// SSL/TLS error
    TlsError,
    /// Invalid or unreachable proxy
    ProxyError,
    /// Unknown TLS profile requested
    InvalidProfile,
    /// Malformed arguments (payload, headers, method, URL)
    InvalidRequest,
    /// Anything else
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::DnsError => "DNS_ERROR",
            ErrorCode::TlsError => "TLS_ERROR",
            ErrorCode::ProxyError => "PROXY_ERROR",
            ErrorCode::InvalidProfile => "INVALID_PROFILE",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connect errors carry their cause only in the message text: keywords
/// to look for, the code they map to and the message prefix.
const CONNECT_CAUSES: &[(&[&str], ErrorCode, &str)] = &[
    (&["dns", "resolve", "getaddrinfo"], ErrorCode::DnsError, "DNS resolution failed"),
    (&["ssl", "tls", "certificate"], ErrorCode::TlsError, "TLS error"),
    (&["proxy"], ErrorCode::ProxyError, "Proxy connection failed"),
];

/// Failure of one request, reported as a status-0 envelope
#[derive(Debug, Clone)]
pub struct RequestError {
    pub code: ErrorCode,
    pub message: String,
}

impl RequestError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn proxy_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProxyError, message)
    }

    pub fn invalid_profile(profile: &str) -> Self {
        Self::new(
            ErrorCode::InvalidProfile,
            format!("Unknown TLS profile: {}", profile),
        )
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unknown, message)
    }

    /// Classify a failed connection by its message.
    pub fn connect_failure(message: String) -> Self {
        let lower = message.to_lowercase();
        let (code, prefix) = CONNECT_CAUSES
            .iter()
            .find(|(keywords, _, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, code, prefix)| (*code, *prefix))
            .unwrap_or((ErrorCode::Unknown, "Connection error"));
        Self::new(code, format!("{}: {}", prefix, message))
    }

    /// Convert into the envelope printed for a failed request.
    pub fn into_envelope(self) -> Envelope {
        Envelope::failure(self.message)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for RequestError {}

impl From<wreq::Error> for RequestError {
    fn from(err: wreq::Error) -> Self {
        let message = err.to_string();

        if err.is_timeout() {
            Self::new(ErrorCode::Timeout, format!("Connection timeout: {}", message))
        } else if err.is_connect() {
            Self::connect_failure(message)
        } else if err.is_request() {
            Self::invalid_request(format!("Invalid request: {}", message))
        } else {
            Self::unknown(message)
        }
    }
}
