//! Fixed-endpoint authenticator behind `ja3-auth`
//!
//! POSTs the caller's payload to the authentication endpoint with headers
//! that match the browser being impersonated: the User-Agent is chosen from
//! the same profile that drives the TLS fingerprint.

use std::ffi::OsString;

use clap::Parser;

use crate::{
    client::execute,
    config::Config,
    emulation::{user_agent_for, DEFAULT_PROFILE},
    error::RequestError,
    models::{non_null_arg, parse_payload, Envelope, RequestParams},
};

const MISSING_PAYLOAD: &str = "Missing payload";

/// Where authentication requests go and the browser context they claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEndpoint {
    pub url: String,
    pub origin: String,
    pub referer: String,
}

impl Default for AuthEndpoint {
    fn default() -> Self {
        Self {
            url: "https://app.humanoidnetwork.org/api/auth/authenticate".to_string(),
            origin: "https://app.humanoidnetwork.org".to_string(),
            referer: "https://app.humanoidnetwork.org/".to_string(),
        }
    }
}

impl AuthEndpoint {
    /// Same origin and referer, different target URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Headers sent with every authentication request.
    pub fn headers(&self, user_agent: &str) -> Vec<(String, String)> {
        [
            ("Accept", "application/json, text/plain, */*"),
            ("Content-Type", "application/json"),
            ("Origin", self.origin.as_str()),
            ("Referer", self.referer.as_str()),
            ("User-Agent", user_agent),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ja3-auth",
    about = "Authenticate with a browser TLS fingerprint and print the response as JSON",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct AuthArgs {
    /// JSON body
    #[arg(allow_hyphen_values = true)]
    pub payload: Option<String>,

    /// Proxy URL, or "null" for none
    #[arg(allow_hyphen_values = true)]
    pub proxy: Option<String>,

    /// Impersonation profile (default: chrome120)
    #[arg(allow_hyphen_values = true)]
    pub profile: Option<String>,

    #[arg(allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl AuthArgs {
    /// Build the POST for `endpoint`. `Ok(None)` means the payload is missing.
    pub fn into_params(
        self,
        endpoint: &AuthEndpoint,
    ) -> Result<Option<RequestParams>, RequestError> {
        let Some(payload) = self.payload else {
            return Ok(None);
        };

        let profile = non_null_arg(self.profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
            .to_string();
        let user_agent = user_agent_for(&profile);

        Ok(Some(RequestParams {
            url: endpoint.url.clone(),
            method: "POST".to_string(),
            payload: parse_payload(&payload)?,
            headers: endpoint.headers(user_agent),
            proxy: non_null_arg(self.proxy.as_deref()).map(str::to_string),
            profile,
        }))
    }
}

/// Authenticate against `endpoint` and produce the envelope.
pub async fn run(args: AuthArgs, endpoint: &AuthEndpoint, config: &Config) -> Envelope {
    let params = match args.into_params(endpoint) {
        Ok(Some(params)) => params,
        Ok(None) => return Envelope::rejected(MISSING_PAYLOAD),
        Err(err) => return err.into_envelope(),
    };

    match execute(&params, config).await {
        Ok(envelope) => envelope,
        Err(err) => err.into_envelope(),
    }
}

/// Parse a full argv (program name first) and run it.
pub async fn run_from<I, T>(argv: I, endpoint: &AuthEndpoint, config: &Config) -> Envelope
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match AuthArgs::try_parse_from(argv) {
        Ok(args) => run(args, endpoint, config).await,
        Err(e) => Envelope::rejected(e.to_string().trim()),
    }
}
