// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./vibracode.toml` > `~/.config/vibracode/vibracode.toml`
//! > `/etc/vibracode/vibracode.toml`, with environment variable overrides
//! via the `VIBRACODE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::VibracodeConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/vibracode/vibracode.toml` (system-wide)
/// 3. `~/.config/vibracode/vibracode.toml` (user XDG config)
/// 4. `./vibracode.toml` (local directory)
/// 5. `VIBRACODE_*` environment variables
pub fn load_config() -> Result<VibracodeConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from an inline TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<VibracodeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VibracodeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VibracodeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VibracodeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(VibracodeConfig::default()))
        .merge(Toml::file("/etc/vibracode/vibracode.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("vibracode/vibracode.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("vibracode.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `VIBRACODE_ADMIN_BASE_URL` must map to
/// `admin.base_url`, not `admin.base.url`.
fn env_provider() -> Env {
    Env::prefixed("VIBRACODE_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: VIBRACODE_ADMIN_ADMIN_TOKEN -> "admin_admin_token"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("admin_", "admin.", 1)
            .replacen("log_", "log.", 1)
            .replacen("cache_", "cache.", 1);
        mapped.into()
    })
}
