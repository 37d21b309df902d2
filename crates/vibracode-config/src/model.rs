// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Vibracode admin client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Vibracode admin configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VibracodeConfig {
    /// Admin API endpoint and credential settings.
    #[serde(default)]
    pub admin: AdminApiConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Per-resource cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Admin API endpoint and credential configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdminApiConfig {
    /// Base URL of the admin backend (no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static bearer credential attached to every request.
    ///
    /// A long-lived shared secret is a deployment-level smell; rotating it
    /// requires redeploying the backend. Prefer supplying it via the
    /// `VIBRACODE_ADMIN_TOKEN` environment variable over committing it to a
    /// config file.
    #[serde(default)]
    pub admin_token: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AdminApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            admin_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://avid-cat-678.convex.site".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Per-resource cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Seconds before a cached resource list is considered stale.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = VibracodeConfig::default();
        assert!(config.admin.base_url.starts_with("https://"));
        assert!(config.admin.admin_token.is_empty());
        assert_eq!(config.admin.timeout_secs, 30);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.cache.ttl_secs, 30);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml_str = r#"
[admin]
base_url = "https://example.com"
admin_tken = "oops"
"#;
        assert!(toml::from_str::<VibracodeConfig>(toml_str).is_err());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let toml_str = r#"
[admin]
admin_token = "secret"
"#;
        let config: VibracodeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.admin.admin_token, "secret");
        assert_eq!(config.admin.timeout_secs, 30);
        assert_eq!(config.cache.ttl_secs, 30);
    }
}
