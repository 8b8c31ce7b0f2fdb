//! ja3-cli - one-shot HTTP requests with browser TLS fingerprints
//!
//! Each invocation sends a single request through a `wreq` client that
//! emulates a browser's TLS (JA3/JA4) and HTTP/2 fingerprint, then prints
//! the outcome as one JSON envelope on stdout.

pub mod auth;
pub mod client;
pub mod config;
pub mod emulation;
pub mod error;
pub mod models;
pub mod runner;
pub mod validation;

pub use config::Config;
pub use error::{ErrorCode, RequestError};
pub use models::{Envelope, RequestParams};
