// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity mutators: partial updates posted to the admin API.
//!
//! Every mutator except [`AdminClient::resume_sandbox`] returns a plain
//! `bool`: true when the backend answered 2xx with a parseable body,
//! false otherwise. The caller's only recovery is a refetch, so no error
//! detail crosses this boundary (the transport already logged it).

use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use vibracode_core::{AgentType, GitHubPushStatus, SessionStatus, SubscriptionPlan};

use crate::fetchers::AdminClient;
use crate::types::ResumeSandboxOutcome;

/// Default time budget for a sandbox resume, in milliseconds.
pub const DEFAULT_RESUME_TIMEOUT_MS: u64 = 600_000;

impl AdminClient {
    /// POST a mutation and collapse the outcome to a boolean.
    async fn post_ok<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> bool {
        match self.transport.post::<serde_json::Value, B>(endpoint, body).await {
            Ok(_) => {
                info!(endpoint, "mutation applied");
                true
            }
            Err(err) => {
                warn!(endpoint, error = %err, "mutation failed");
                false
            }
        }
    }

    /// Overwrite a user's credit balance.
    pub async fn set_user_credits(&self, user_id: &str, credits_usd: f64) -> bool {
        self.post_ok(
            "/admin/user/credits",
            &json!({"userId": user_id, "creditsUSD": credits_usd}),
        )
        .await
    }

    /// Overwrite a user's remaining message allowance.
    pub async fn set_user_messages(&self, user_id: &str, messages_remaining: u64) -> bool {
        self.post_ok(
            "/admin/user/messages",
            &json!({"userId": user_id, "messagesRemaining": messages_remaining}),
        )
        .await
    }

    /// Change a user's subscription plan, optionally resetting their
    /// message allowance to the new plan's quota.
    pub async fn set_user_plan(
        &self,
        user_id: &str,
        plan: SubscriptionPlan,
        reset_messages: bool,
    ) -> bool {
        self.post_ok(
            "/admin/user/update",
            &json!({
                "userId": user_id,
                "updates": {"subscriptionPlan": plan, "resetMessages": reset_messages}
            }),
        )
        .await
    }

    /// Delete a user and their owned records.
    pub async fn delete_user(&self, user_id: &str) -> bool {
        self.post_ok("/admin/user/delete", &json!({"userId": user_id}))
            .await
    }

    /// Switch the platform-wide default agent.
    pub async fn set_global_agent_type(&self, agent_type: AgentType) -> bool {
        self.post_ok("/admin/config/agent-type", &json!({"agentType": agent_type}))
            .await
    }

    /// Force a session into the given lifecycle status.
    pub async fn update_session_status(&self, session_id: &str, status: SessionStatus) -> bool {
        self.post_ok(
            "/admin/session/update",
            &json!({"sessionId": session_id, "updates": {"status": status}}),
        )
        .await
    }

    /// Overwrite a session's GitHub push state.
    pub async fn update_session_push_status(
        &self,
        session_id: &str,
        push_status: GitHubPushStatus,
    ) -> bool {
        self.post_ok(
            "/admin/session/update",
            &json!({"sessionId": session_id, "updates": {"githubPushStatus": push_status}}),
        )
        .await
    }

    /// Send a push notification to every registered device.
    pub async fn broadcast_push(&self, title: &str, body: &str) -> bool {
        self.post_ok("/admin/push/broadcast", &json!({"title": title, "body": body}))
            .await
    }

    /// Backfill users missing post-migration fields. Idempotent on the
    /// backend side.
    pub async fn fix_missing_user_fields(&self) -> bool {
        self.post_ok("/admin/fix-users", &json!({})).await
    }

    /// Resume a stopped sandbox by id or preview URL.
    ///
    /// The one mutator with a richer contract: the backend's structured
    /// outcome is passed through unchanged, and a transport failure is
    /// synthesized as [`ResumeSandboxOutcome::request_failed`].
    pub async fn resume_sandbox(
        &self,
        sandbox_id_or_url: &str,
        timeout_ms: Option<u64>,
    ) -> ResumeSandboxOutcome {
        let timeout_ms = timeout_ms.unwrap_or(DEFAULT_RESUME_TIMEOUT_MS);
        match self
            .transport
            .post::<ResumeSandboxOutcome, _>(
                "/admin/sandbox/resume",
                &json!({"sandboxIdOrUrl": sandbox_id_or_url, "timeoutMs": timeout_ms}),
            )
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "sandbox resume request failed");
                ResumeSandboxOutcome::request_failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibracode_config::AdminApiConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> AdminClient {
        AdminClient::new(&AdminApiConfig {
            base_url: server.uri(),
            admin_token: "test-secret".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn set_user_plan_nests_updates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/user/update"))
            .and(body_json(serde_json::json!({
                "userId": "usr_1",
                "updates": {"subscriptionPlan": "weekly_plus", "resetMessages": true}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        assert!(
            client(&server)
                .await
                .set_user_plan("usr_1", SubscriptionPlan::WeeklyPlus, true)
                .await
        );
    }

    #[tokio::test]
    async fn failed_mutation_is_false_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/user/delete"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(!client(&server).await.delete_user("usr_1").await);
    }

    #[tokio::test]
    async fn session_status_serializes_screaming_snake() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/session/update"))
            .and(body_json(serde_json::json!({
                "sessionId": "ses_1",
                "updates": {"status": "RUNNING"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        assert!(
            client(&server)
                .await
                .update_session_status("ses_1", SessionStatus::Running)
                .await
        );
    }

    #[tokio::test]
    async fn resume_sandbox_defaults_the_timeout_and_passes_outcome_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/sandbox/resume"))
            .and(body_json(serde_json::json!({
                "sandboxIdOrUrl": "sbx_1",
                "timeoutMs": 600000
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "sandboxId": "sbx_1",
                "appUrl": "https://preview.example",
                "timeoutMs": 600000
            })))
            .mount(&server)
            .await;

        let outcome = client(&server).await.resume_sandbox("sbx_1", None).await;
        assert!(outcome.success);
        assert_eq!(outcome.app_url.as_deref(), Some("https://preview.example"));
    }

    #[tokio::test]
    async fn resume_sandbox_synthesizes_request_failed_on_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/sandbox/resume"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let outcome = client(&server).await.resume_sandbox("sbx_1", Some(1000)).await;
        assert_eq!(outcome, ResumeSandboxOutcome::request_failed());
    }

    #[tokio::test]
    async fn broadcast_and_fix_users_post_expected_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/push/broadcast"))
            .and(body_json(serde_json::json!({"title": "Hi", "body": "There"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"sent": 4})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/admin/fix-users"))
            .and(body_json(serde_json::json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"fixed": 2})))
            .mount(&server)
            .await;

        let client = client(&server).await;
        assert!(client.broadcast_push("Hi", "There").await);
        assert!(client.fix_missing_user_fields().await);
    }
}
