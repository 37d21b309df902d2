// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire envelopes and bespoke response shapes for the admin API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vibracode_core::{
    ConvexProjectCredentials, GitHubCredentials, Message, PaymentTransaction, Session, User,
};

/// `GET /admin/users` envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsersEnvelope {
    pub users: Vec<User>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub has_more: bool,
}

/// `GET /admin/sessions` envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionsEnvelope {
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub has_more: bool,
}

/// `GET /admin/transactions` envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionsEnvelope {
    pub transactions: Vec<PaymentTransaction>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub has_more: bool,
}

/// `GET /admin/messages` envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MessagesEnvelope {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub has_more: bool,
}

/// Envelope shared by the two credential listings.
#[derive(Debug, Deserialize)]
pub(crate) struct ConvexCredentialsEnvelope {
    pub credentials: Vec<ConvexProjectCredentials>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GitHubCredentialsEnvelope {
    pub credentials: Vec<GitHubCredentials>,
}

/// Raw `GET /admin/stats` shape, aggregated server-side.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub by_plan: HashMap<String, u64>,
    #[serde(rename = "totalCreditsUSD", default)]
    pub total_credits_usd: f64,
}

/// Raw `GET /admin/config` shape: a single flat object, not a list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawGlobalConfig {
    pub agent_type: String,
    pub updated_at: f64,
}

/// Outcome of `POST /admin/sandbox/resume`.
///
/// The one mutator with a richer contract: a structured backend error
/// message is distinguishable from a transport failure (synthesized as
/// [`ResumeSandboxOutcome::request_failed`]) and from success with a
/// launch URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSandboxOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResumeSandboxOutcome {
    /// The synthesized outcome for any transport-level failure.
    pub fn request_failed() -> Self {
        Self {
            success: false,
            sandbox_id: None,
            app_url: None,
            timeout_ms: None,
            error: Some("Request failed".to_string()),
        }
    }
}
