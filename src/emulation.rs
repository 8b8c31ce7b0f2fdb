//! Browser profile lookup: TLS emulation and matching User-Agent strings
//!
//! Profile strings are resolved at runtime to `wreq_util::Emulation`
//! variants through their serde names ("chrome_131", "safari_15.5"). The
//! compact spelling used by curl-impersonate based tooling ("chrome120",
//! "safari15_5") is accepted as well.

use strum::VariantArray;
use wreq_util::Emulation;

/// Profile used when the caller does not name one.
pub const DEFAULT_PROFILE: &str = "chrome120";

/// User-Agent strings matching the TLS fingerprint of each profile.
static USER_AGENTS: &[(&str, &str)] = &[
    (
        "chrome120",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ),
    (
        "chrome124",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    ),
    (
        "chrome119",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    ),
    (
        "edge101",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.4951.64 Safari/537.36 Edg/101.0.1210.53",
    ),
    (
        "edge99",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.51 Safari/537.36 Edg/99.0.1150.39",
    ),
    (
        "safari15_5",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.5 Safari/605.1.15",
    ),
];

/// Browser versions with a User-Agent entry but no emulation of their own,
/// mapped to the closest emulation available.
static PROFILE_ALIASES: &[(&str, &str)] = &[("edge99", "edge_101")];

/// Parse a TLS profile string into an Emulation variant.
///
/// Returns the unrecognised name as the error.
pub fn parse_tls_profile(profile: &str) -> Result<Emulation, String> {
    from_serde_name(profile)
        .or_else(|| normalize_profile_name(profile).and_then(|name| from_serde_name(&name)))
        .or_else(|| alias_for(profile).and_then(from_serde_name))
        .ok_or_else(|| profile.to_string())
}

fn alias_for(profile: &str) -> Option<&'static str> {
    PROFILE_ALIASES
        .iter()
        .find(|(name, _)| *name == profile)
        .map(|(_, target)| *target)
}

fn from_serde_name(name: &str) -> Option<Emulation> {
    serde_json::from_value(serde_json::Value::String(name.to_string())).ok()
}

/// Rewrite a compact profile name ("safari15_5") into the serde form
/// ("safari_15.5"). Returns `None` when the name does not have the
/// `<letters><digits>[_<digits>...]` shape.
fn normalize_profile_name(profile: &str) -> Option<String> {
    let split = profile.find(|c: char| c.is_ascii_digit())?;
    let (family, version) = profile.split_at(split);

    if family.is_empty() || !family.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let numeric = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    if !version.split('_').all(numeric) {
        return None;
    }

    Some(format!("{}_{}", family, version.replace('_', ".")))
}

/// Get a list of all available TLS profile names.
///
/// Reads `Emulation::VARIANTS`, so newly added browser versions show up
/// without changes here.
pub fn available_profiles() -> Vec<String> {
    Emulation::VARIANTS
        .iter()
        .filter_map(|e| {
            serde_json::to_string(e)
                .ok()
                .map(|s| s.trim_matches('"').to_string())
        })
        .collect()
}

/// User-Agent for a profile, falling back to the default profile's entry.
pub fn user_agent_for(profile: &str) -> &'static str {
    lookup_user_agent(profile)
        .or_else(|| lookup_user_agent(DEFAULT_PROFILE))
        .unwrap_or_default()
}

fn lookup_user_agent(profile: &str) -> Option<&'static str> {
    USER_AGENTS
        .iter()
        .find(|(name, _)| *name == profile)
        .map(|(_, ua)| *ua)
}
