//! Store endpoint configuration.
//!
//! Two values are needed: the service URL and its public access key. They
//! come from the process environment first and then from the bundled
//! `assets/config.env`. Nothing is validated here; a missing or wrong value
//! shows up as an error on the first request.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Bundled config for builds without a process environment (web, mobile).
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

static BUNDLED: Lazy<HashMap<String, String>> = Lazy::new(|| parse_env_lines(BUNDLED_CONFIG));

const URL_KEYS: &[&str] = &["SUPABASE_URL", "VITE_SUPABASE_URL"];
const KEY_KEYS: &[&str] = &["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
}

impl StoreConfig {
    /// Read from the process environment, falling back to the bundled file.
    pub fn load() -> Self {
        Self::resolve(|key| std::env::var(key).ok(), &BUNDLED)
    }

    /// Resolve both values with `lookup` taking priority over `bundled`.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        bundled: &HashMap<String, String>,
    ) -> Self {
        let pick = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| lookup(key).filter(|value| !value.is_empty()))
                .or_else(|| keys.iter().find_map(|key| bundled.get(*key).cloned()))
                .unwrap_or_default()
        };

        let config = Self {
            url: pick(URL_KEYS),
            anon_key: pick(KEY_KEYS),
        };
        if config.url.is_empty() {
            tracing::warn!("no store URL configured; board requests will fail");
        }
        config
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(text: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"');
            values.insert(key.trim().to_string(), value.to_string());
        }
    }
    values
}
