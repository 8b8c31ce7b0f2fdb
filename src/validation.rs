//! URL validation and log-safe URL rendering

use url::Url;

use crate::error::RequestError;

/// Allowed URL schemes for outgoing requests
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Validate a target URL: it must parse, use http(s) and name a host.
pub fn validate_url(url_str: &str) -> Result<Url, RequestError> {
    let url = Url::parse(url_str)
        .map_err(|e| RequestError::invalid_request(format!("Invalid URL: {}", e)))?;

    let scheme = url.scheme().to_lowercase();
    if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        return Err(RequestError::invalid_request(format!(
            "URL scheme '{}' not allowed. Only http and https are permitted.",
            scheme
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(RequestError::invalid_request(
            "URL must have a valid hostname.",
        ));
    }

    Ok(url)
}

/// Sanitize a URL for logging by removing credentials
pub fn sanitize_url_for_logging(url_str: &str) -> String {
    match Url::parse(url_str) {
        Ok(mut url) => {
            if !url.username().is_empty() || url.password().is_some() {
                let _ = url.set_username("***");
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => "[invalid URL]".to_string(),
    }
}
