//! Generic request runner behind `ja3-request`

use std::ffi::OsString;

use clap::Parser;

use crate::{
    client::execute,
    config::Config,
    emulation::DEFAULT_PROFILE,
    error::RequestError,
    models::{non_null_arg, parse_headers, parse_payload, Envelope, RequestParams},
};

const MISSING_ARGUMENTS: &str = "Missing arguments";

/// Positional arguments. Every slot is optional so that a short argument
/// list is reported in the envelope rather than by clap.
#[derive(Debug, Parser)]
#[command(
    name = "ja3-request",
    about = "Send one HTTP request with a browser TLS fingerprint and print the response as JSON",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct RunnerArgs {
    /// Target URL
    #[arg(allow_hyphen_values = true)]
    pub url: Option<String>,

    /// HTTP method
    #[arg(allow_hyphen_values = true)]
    pub method: Option<String>,

    /// JSON body, or "null" for none
    #[arg(allow_hyphen_values = true)]
    pub payload: Option<String>,

    /// JSON object of request headers
    #[arg(allow_hyphen_values = true)]
    pub headers: Option<String>,

    /// Proxy URL, or "null" for none
    #[arg(allow_hyphen_values = true)]
    pub proxy: Option<String>,

    /// Impersonation profile (default: chrome120)
    #[arg(allow_hyphen_values = true)]
    pub profile: Option<String>,

    #[arg(allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl RunnerArgs {
    /// Decode the raw arguments. `Ok(None)` means required ones are missing.
    pub fn into_params(self) -> Result<Option<RequestParams>, RequestError> {
        let RunnerArgs {
            url,
            method,
            payload,
            headers,
            proxy,
            profile,
            ..
        } = self;

        let (Some(url), Some(method), Some(payload), Some(headers)) =
            (url, method, payload, headers)
        else {
            return Ok(None);
        };

        let payload = match non_null_arg(Some(&payload)) {
            Some(raw) => parse_payload(raw)?,
            None => None,
        };

        Ok(Some(RequestParams {
            url,
            method,
            payload,
            headers: parse_headers(&headers)?,
            proxy: non_null_arg(proxy.as_deref()).map(str::to_string),
            profile: non_null_arg(profile.as_deref())
                .unwrap_or(DEFAULT_PROFILE)
                .to_string(),
        }))
    }
}

/// Run one request and produce its envelope.
pub async fn run(args: RunnerArgs, config: &Config) -> Envelope {
    let params = match args.into_params() {
        Ok(Some(params)) => params,
        Ok(None) => return Envelope::rejected(MISSING_ARGUMENTS),
        Err(err) => return err.into_envelope(),
    };

    match execute(&params, config).await {
        Ok(envelope) => envelope,
        Err(err) => err.into_envelope(),
    }
}

/// Parse a full argv (program name first) and run it.
pub async fn run_from<I, T>(argv: I, config: &Config) -> Envelope
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match RunnerArgs::try_parse_from(argv) {
        Ok(args) => run(args, config).await,
        Err(e) => Envelope::rejected(e.to_string().trim()),
    }
}
