//! Execute one HTTP request with TLS fingerprint emulation

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, error, info, warn};
use wreq::{header::HeaderMap, Client, Method, Proxy};

use crate::{
    config::Config,
    emulation::{available_profiles, parse_tls_profile},
    error::RequestError,
    models::{Envelope, RequestParams},
    validation::{sanitize_url_for_logging, validate_url},
};

/// Headers the client computes itself
const SKIPPED_HEADERS: &[&str] = &["host", "content-length", "transfer-encoding"];

/// Send the request and build the response envelope.
///
/// Any status code the server returns is a successful envelope; only
/// failures to complete the exchange are errors.
pub async fn execute(params: &RequestParams, config: &Config) -> Result<Envelope, RequestError> {
    let safe_url = sanitize_url_for_logging(&params.url);

    debug!(
        url = %safe_url,
        method = %params.method,
        profile = %params.profile,
        proxied = params.proxy.is_some(),
        "Processing request"
    );

    let validated_url = validate_url(&params.url)?;

    let emulation = parse_tls_profile(&params.profile).map_err(|invalid| {
        warn!(
            profile = %invalid,
            available = %available_profiles().join(","),
            "Invalid TLS profile requested"
        );
        RequestError::invalid_profile(&invalid)
    })?;

    let method: Method = params
        .method
        .to_uppercase()
        .parse()
        .map_err(|_| {
            RequestError::invalid_request(format!("Invalid HTTP method: {}", params.method))
        })?;

    let mut client_builder = Client::builder().emulation(emulation).timeout(config.timeout);

    // No proxy argument means a direct connection, even if HTTP_PROXY is set.
    match &params.proxy {
        Some(proxy_url) => {
            let safe_proxy_url = sanitize_url_for_logging(proxy_url);

            let proxy = Proxy::all(proxy_url.as_str()).map_err(|e| {
                error!(proxy = %safe_proxy_url, error = %e, "Invalid proxy configuration");
                RequestError::proxy_error(format!("Invalid proxy URL: {}", e))
            })?;
            client_builder = client_builder.proxy(proxy);
        }
        None => client_builder = client_builder.no_proxy(),
    }

    let client = client_builder.build().map_err(|e| {
        error!(error = %e, "Failed to build HTTP client");
        RequestError::unknown(format!("Failed to build client: {}", e))
    })?;

    let mut request_builder = client.request(method, validated_url.as_str());

    for (name, value) in &params.headers {
        if SKIPPED_HEADERS.contains(&name.to_lowercase().as_str()) {
            continue;
        }
        request_builder = request_builder.header(name.as_str(), value.as_str());
    }

    if let Some(payload) = &params.payload {
        request_builder = request_builder.json(payload);
    }

    let start = Instant::now();
    let response = request_builder.send().await.map_err(|e| {
        let err = RequestError::from(e);
        error!(url = %safe_url, code = %err.code, error = %err.message, "Request failed");
        err
    })?;

    let status = response.status().as_u16();
    let headers = collect_headers(response.headers());

    let text = response.text().await.map_err(|e| {
        error!(error = %e, "Failed to read response body");
        RequestError::unknown(format!("Failed to read response body: {}", e))
    })?;

    info!(
        url = %safe_url,
        status = status,
        elapsed_ms = start.elapsed().as_millis() as u64,
        body_size = text.len(),
        "Request completed"
    );

    Ok(Envelope::response(status, text, headers))
}

/// Flatten response headers into a name → value map. Repeated headers are
/// joined with ", ".
fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        collected
            .entry(name.to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    collected
}
