// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user credential records.
//!
//! Secrets are never rendered whole: display code goes through the
//! `masked_*` helpers, which only reveal presence and a short prefix.

use serde::{Deserialize, Serialize};

use super::CreationStamped;

/// How many leading characters of a secret survive masking.
const MASK_PREFIX_LEN: usize = 4;

fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let prefix: String = secret.chars().take(MASK_PREFIX_LEN).collect();
    format!("{prefix}\u{2022}\u{2022}\u{2022}\u{2022}")
}

/// Convex deploy credentials for a user's generated project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvexProjectCredentials {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    pub user_id: String,
    pub project_slug: String,
    pub team_slug: String,
    pub project_deploy_key: String,
    pub created_at: f64,
}

impl ConvexProjectCredentials {
    /// Presence-masked deploy key for display.
    pub fn masked_deploy_key(&self) -> String {
        mask_secret(&self.project_deploy_key)
    }
}

impl CreationStamped for ConvexProjectCredentials {
    fn creation_time(&self) -> f64 {
        self.creation_time
    }
}

/// A user's GitHub connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubCredentials {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    pub clerk_id: String,
    pub access_token: String,
    pub username: String,
    pub connected_at: f64,
    pub updated_at: f64,
}

impl GitHubCredentials {
    /// Presence-masked access token for display.
    pub fn masked_token(&self) -> String {
        mask_secret(&self.access_token)
    }
}

impl CreationStamped for GitHubCredentials {
    fn creation_time(&self) -> f64 {
        self.creation_time
    }
}
