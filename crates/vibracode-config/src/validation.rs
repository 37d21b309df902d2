// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as URL schemes and non-zero timeouts.

use crate::diagnostic::ConfigError;
use crate::model::VibracodeConfig;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &VibracodeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.admin.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "admin.base_url must not be empty".to_string(),
        });
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("admin.base_url `{base_url}` must start with http:// or https://"),
        });
    } else if base_url.ends_with('/') {
        errors.push(ConfigError::Validation {
            message: format!(
                "admin.base_url `{base_url}` must not have a trailing slash (endpoints are appended verbatim)"
            ),
        });
    }

    if config.admin.admin_token.trim().is_empty() {
        errors.push(ConfigError::MissingKey {
            key: "admin.admin_token".to_string(),
        });
    }

    if config.admin.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "admin.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.cache.ttl_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "cache.ttl_secs must be at least 1".to_string(),
        });
    }

    if !VALID_LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of {}",
                config.log.level,
                VALID_LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
