// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity fetchers: one call per resource, each unwrapping the backend's
//! envelope into a plain list.
//!
//! Fetchers never propagate errors: any transport failure collapses to an
//! empty list (or zeroed stats), deliberately conflating "no data" with
//! "backend down" so screens render a uniform empty state. Callers that
//! need the distinction use [`AdminTransport`] directly.

use tracing::{debug, warn};
use vibracode_config::AdminApiConfig;
use vibracode_core::{
    AdminStats, ConvexProjectCredentials, GitHubCredentials, GlobalConfig, Message,
    PaymentTransaction, Session, User, VibracodeError,
};

use crate::transport::AdminTransport;
use crate::types::{
    ConvexCredentialsEnvelope, GitHubCredentialsEnvelope, MessagesEnvelope, RawGlobalConfig,
    RawStats, SessionsEnvelope, TransactionsEnvelope, UsersEnvelope,
};

/// Default page size for message listing.
pub const DEFAULT_MESSAGE_LIMIT: u32 = 100;

/// High-level admin API client: fetchers here, mutators in
/// [`crate::mutators`].
#[derive(Debug, Clone)]
pub struct AdminClient {
    pub(crate) transport: AdminTransport,
}

impl AdminClient {
    pub fn new(config: &AdminApiConfig) -> Result<Self, VibracodeError> {
        Ok(Self {
            transport: AdminTransport::new(config)?,
        })
    }

    /// Direct access to the strict transport layer.
    pub fn transport(&self) -> &AdminTransport {
        &self.transport
    }

    /// All users. Empty on any failure.
    pub async fn users(&self) -> Vec<User> {
        match self.transport.get::<UsersEnvelope>("/admin/users").await {
            Ok(envelope) => {
                debug!(total = envelope.total, has_more = envelope.has_more, "users fetched");
                envelope.users
            }
            Err(err) => {
                warn!(error = %err, "user fetch failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Backend-aggregated dashboard stats. Zeroed on any failure.
    ///
    /// The backend reports totals and a per-plan breakdown; active
    /// subscriptions are the pro, business, and enterprise counts summed.
    pub async fn stats(&self) -> AdminStats {
        match self.transport.get::<RawStats>("/admin/stats").await {
            Ok(raw) => {
                let plan = |name: &str| raw.by_plan.get(name).copied().unwrap_or(0);
                AdminStats {
                    total_users: raw.total,
                    active_subscriptions: plan("pro") + plan("business") + plan("enterprise"),
                    total_revenue: raw.total_credits_usd,
                    ..Default::default()
                }
            }
            Err(err) => {
                warn!(error = %err, "stats fetch failed, returning zeroed stats");
                AdminStats::default()
            }
        }
    }

    /// All sessions. Empty on any failure.
    pub async fn sessions(&self) -> Vec<Session> {
        match self
            .transport
            .get::<SessionsEnvelope>("/admin/sessions")
            .await
        {
            Ok(envelope) => {
                debug!(total = envelope.total, has_more = envelope.has_more, "sessions fetched");
                envelope.sessions
            }
            Err(err) => {
                warn!(error = %err, "session fetch failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// All payment transactions. Empty on any failure.
    pub async fn payments(&self) -> Vec<PaymentTransaction> {
        match self
            .transport
            .get::<TransactionsEnvelope>("/admin/transactions")
            .await
        {
            Ok(envelope) => {
                debug!(total = envelope.total, has_more = envelope.has_more, "transactions fetched");
                envelope.transactions
            }
            Err(err) => {
                warn!(error = %err, "transaction fetch failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Global configuration, reshaped from the backend's flat object into
    /// a one-element list matching the generic config record used
    /// everywhere else. Empty on any failure.
    pub async fn global_config(&self) -> Vec<GlobalConfig> {
        match self.transport.get::<RawGlobalConfig>("/admin/config").await {
            Ok(raw) => vec![GlobalConfig {
                id: "config".to_string(),
                creation_time: raw.updated_at,
                key: "agentType".to_string(),
                value: raw.agent_type,
                updated_at: raw.updated_at,
                updated_by: None,
            }],
            Err(err) => {
                warn!(error = %err, "config fetch failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Convex project credentials. Empty on any failure.
    pub async fn convex_credentials(&self) -> Vec<ConvexProjectCredentials> {
        match self
            .transport
            .get::<ConvexCredentialsEnvelope>("/admin/convex-credentials")
            .await
        {
            Ok(envelope) => envelope.credentials,
            Err(err) => {
                warn!(error = %err, "convex credential fetch failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// GitHub connections. Empty on any failure.
    pub async fn github_credentials(&self) -> Vec<GitHubCredentials> {
        match self
            .transport
            .get::<GitHubCredentialsEnvelope>("/admin/github-credentials")
            .await
        {
            Ok(envelope) => envelope.credentials,
            Err(err) => {
                warn!(error = %err, "github credential fetch failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Messages, optionally scoped to one session, with limit/offset
    /// pagination passed through to the query string.
    ///
    /// Messages whose content is empty or whitespace-only are dropped;
    /// they are tool-invocation carriers with nothing to display.
    pub async fn messages(
        &self,
        session_id: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Vec<Message> {
        let mut endpoint = format!("/admin/messages?limit={limit}&offset={offset}");
        if let Some(session_id) = session_id {
            endpoint.push_str("&sessionId=");
            endpoint.push_str(session_id);
        }

        match self.transport.get::<MessagesEnvelope>(&endpoint).await {
            Ok(envelope) => {
                debug!(total = envelope.total, has_more = envelope.has_more, "messages fetched");
                envelope
                    .messages
                    .into_iter()
                    .filter(Message::has_content)
                    .collect()
            }
            Err(err) => {
                warn!(error = %err, "message fetch failed, returning empty list");
                Vec::new()
            }
        }
    }
}
