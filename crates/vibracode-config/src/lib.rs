// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Vibracode admin client.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and diagnostic error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use vibracode_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Admin API: {}", config.admin.base_url);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AdminApiConfig, CacheConfig, LogConfig, VibracodeConfig};

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to miette diagnostics with typo suggestions
///
/// Returns either a valid `VibracodeConfig` or a list of diagnostic errors.
pub fn load_and_validate() -> Result<VibracodeConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load configuration from a specific TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<VibracodeConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_valid_config_loads_and_validates() {
        let config = load_and_validate_str(
            r#"
[admin]
base_url = "http://localhost:3210"
admin_token = "dev"
"#,
        )
        .unwrap();
        assert_eq!(config.admin.base_url, "http://localhost:3210");
    }

    #[test]
    fn typo_produces_suggestion_diagnostic() {
        let errors = load_and_validate_str(
            r#"
[admin]
admin_tken = "dev"
"#,
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::UnknownKey { key, .. } if key == "admin_tken")));
    }

    #[test]
    fn missing_token_is_a_validation_error() {
        let errors = load_and_validate_str("").unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::MissingKey { key } if key == "admin.admin_token")));
    }
}
