// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authenticated HTTP transport for the admin API.
//!
//! Provides [`AdminTransport`] with a strict error taxonomy: callers can
//! tell a network failure from a non-2xx status from a malformed body.
//! The fetcher/mutator layer on top collapses all three into the lenient
//! empty-list/boolean contract the admin screens rely on.
//!
//! No retries: a single failed call is a single reported failure, and
//! recovery is a user-triggered refetch.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use vibracode_config::AdminApiConfig;
use vibracode_core::VibracodeError;

/// HTTP transport carrying the static admin bearer credential.
#[derive(Debug, Clone)]
pub struct AdminTransport {
    client: reqwest::Client,
    base_url: String,
}

impl AdminTransport {
    /// Build a transport from the admin API configuration.
    ///
    /// The bearer header is marked sensitive so it never appears in
    /// request debug output.
    pub fn new(config: &AdminApiConfig) -> Result<Self, VibracodeError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.admin_token))
            .map_err(|e| VibracodeError::Config(format!("invalid admin token: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VibracodeError::Http {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Issue an authenticated GET and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, VibracodeError> {
        debug!(endpoint, "GET");
        let response = self
            .client
            .get(format!("{}{endpoint}", self.base_url))
            .send()
            .await
            .map_err(|e| VibracodeError::Http {
                message: format!("GET {endpoint} failed: {e}"),
                source: Some(Box::new(e)),
            })?;
        Self::decode(endpoint, response).await
    }

    /// Issue an authenticated POST with a JSON body and decode the response.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, VibracodeError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(endpoint, "POST");
        let response = self
            .client
            .post(format!("{}{endpoint}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| VibracodeError::Http {
                message: format!("POST {endpoint} failed: {e}"),
                source: Some(Box::new(e)),
            })?;
        Self::decode(endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, VibracodeError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| VibracodeError::Http {
            message: format!("failed to read response body from {endpoint}: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(endpoint, status = %status, "response received");

        if !status.is_success() {
            warn!(endpoint, status = %status, body = %body, "backend error");
            return Err(VibracodeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| VibracodeError::Decode {
            message: format!("failed to parse response from {endpoint}: {e}"),
            source: Some(Box::new(e)),
        })
    }
}
