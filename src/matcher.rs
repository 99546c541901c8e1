//! Registered webhook lookup for duplicate detection

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Webhook registration record as returned by the provider API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisteredHook {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub config: HashMap<String, String>,
    pub events: Vec<String>,
    pub active: bool,
}

/// Finds the first registered hook whose configured target shares a host
/// with `raw_url`.
///
/// Scheme, path and port are ignored for the comparison. An unparseable
/// target, and hooks whose `url` config entry is absent or unparseable,
/// never match.
pub fn matching_hooks<'a>(
    hooks: &'a [RegisteredHook],
    raw_url: &str,
) -> Option<&'a RegisteredHook> {
    let target = match Url::parse(raw_url) {
        Ok(url) => url,
        Err(e) => {
            debug!("Skipping hook lookup, target '{}' is not a URL: {}", raw_url, e);
            return None;
        }
    };

    hooks.iter().find(|hook| {
        hook.config
            .get("url")
            .and_then(|configured| Url::parse(configured).ok())
            .is_some_and(|configured| configured.host_str() == target.host_str())
    })
}
