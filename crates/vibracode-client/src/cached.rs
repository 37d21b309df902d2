// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cached facade over [`AdminClient`].
//!
//! One cache entry per resource, plus messages keyed by their query.
//! Reads are served from cache inside the staleness window; every mutator
//! invalidates the entries it may have changed, so the next read refetches
//! and replaces the entry wholesale. There is no optimistic local edit.

use std::sync::Arc;
use std::time::Duration;

use vibracode_cache::{Clock, ResourceCache};
use vibracode_config::CacheConfig;
use vibracode_core::{
    AdminStats, AgentType, ConvexProjectCredentials, GitHubCredentials, GitHubPushStatus,
    GlobalConfig, Message, PaymentTransaction, Session, SessionStatus, SubscriptionPlan, User,
};

use crate::fetchers::AdminClient;
use crate::types::ResumeSandboxOutcome;

/// Cache key for a message listing: session scope plus pagination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MessageKey {
    session_id: Option<String>,
    limit: u32,
    offset: u32,
}

/// [`AdminClient`] with per-resource caching and invalidate-on-mutation.
pub struct CachedClient {
    client: AdminClient,
    users: ResourceCache<(), Vec<User>>,
    stats: ResourceCache<(), AdminStats>,
    sessions: ResourceCache<(), Vec<Session>>,
    payments: ResourceCache<(), Vec<PaymentTransaction>>,
    config: ResourceCache<(), Vec<GlobalConfig>>,
    convex_credentials: ResourceCache<(), Vec<ConvexProjectCredentials>>,
    github_credentials: ResourceCache<(), Vec<GitHubCredentials>>,
    messages: ResourceCache<MessageKey, Vec<Message>>,
}

impl CachedClient {
    pub fn new(client: AdminClient, config: &CacheConfig) -> Self {
        Self::with_ttl(client, Duration::from_secs(config.ttl_secs))
    }

    pub fn with_ttl(client: AdminClient, ttl: Duration) -> Self {
        Self {
            client,
            users: ResourceCache::new(ttl),
            stats: ResourceCache::new(ttl),
            sessions: ResourceCache::new(ttl),
            payments: ResourceCache::new(ttl),
            config: ResourceCache::new(ttl),
            convex_credentials: ResourceCache::new(ttl),
            github_credentials: ResourceCache::new(ttl),
            messages: ResourceCache::new(ttl),
        }
    }

    /// As [`Self::with_ttl`], with an injected clock for staleness tests.
    pub fn with_clock(client: AdminClient, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            users: ResourceCache::with_clock(ttl, Arc::clone(&clock)),
            stats: ResourceCache::with_clock(ttl, Arc::clone(&clock)),
            sessions: ResourceCache::with_clock(ttl, Arc::clone(&clock)),
            payments: ResourceCache::with_clock(ttl, Arc::clone(&clock)),
            config: ResourceCache::with_clock(ttl, Arc::clone(&clock)),
            convex_credentials: ResourceCache::with_clock(ttl, Arc::clone(&clock)),
            github_credentials: ResourceCache::with_clock(ttl, Arc::clone(&clock)),
            messages: ResourceCache::with_clock(ttl, clock),
        }
    }

    /// The uncached client underneath.
    pub fn inner(&self) -> &AdminClient {
        &self.client
    }

    // Cached reads.

    pub async fn users(&self) -> Arc<Vec<User>> {
        self.users.get_or_fetch((), self.client.users()).await
    }

    pub async fn stats(&self) -> Arc<AdminStats> {
        self.stats.get_or_fetch((), self.client.stats()).await
    }

    pub async fn sessions(&self) -> Arc<Vec<Session>> {
        self.sessions.get_or_fetch((), self.client.sessions()).await
    }

    pub async fn payments(&self) -> Arc<Vec<PaymentTransaction>> {
        self.payments.get_or_fetch((), self.client.payments()).await
    }

    pub async fn global_config(&self) -> Arc<Vec<GlobalConfig>> {
        self.config.get_or_fetch((), self.client.global_config()).await
    }

    pub async fn convex_credentials(&self) -> Arc<Vec<ConvexProjectCredentials>> {
        self.convex_credentials
            .get_or_fetch((), self.client.convex_credentials())
            .await
    }

    pub async fn github_credentials(&self) -> Arc<Vec<GitHubCredentials>> {
        self.github_credentials
            .get_or_fetch((), self.client.github_credentials())
            .await
    }

    pub async fn messages(
        &self,
        session_id: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Arc<Vec<Message>> {
        let key = MessageKey {
            session_id: session_id.map(str::to_string),
            limit,
            offset,
        };
        self.messages
            .get_or_fetch(key, self.client.messages(session_id, limit, offset))
            .await
    }

    // Forced refreshes (pull-to-refresh semantics).

    pub async fn refresh_users(&self) -> Arc<Vec<User>> {
        self.users.refresh((), self.client.users()).await
    }

    pub async fn refresh_stats(&self) -> Arc<AdminStats> {
        self.stats.refresh((), self.client.stats()).await
    }

    pub async fn refresh_sessions(&self) -> Arc<Vec<Session>> {
        self.sessions.refresh((), self.client.sessions()).await
    }

    pub async fn refresh_payments(&self) -> Arc<Vec<PaymentTransaction>> {
        self.payments.refresh((), self.client.payments()).await
    }

    pub async fn refresh_global_config(&self) -> Arc<Vec<GlobalConfig>> {
        self.config.refresh((), self.client.global_config()).await
    }

    pub async fn refresh_convex_credentials(&self) -> Arc<Vec<ConvexProjectCredentials>> {
        self.convex_credentials
            .refresh((), self.client.convex_credentials())
            .await
    }

    pub async fn refresh_github_credentials(&self) -> Arc<Vec<GitHubCredentials>> {
        self.github_credentials
            .refresh((), self.client.github_credentials())
            .await
    }

    pub async fn refresh_messages(
        &self,
        session_id: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Arc<Vec<Message>> {
        let key = MessageKey {
            session_id: session_id.map(str::to_string),
            limit,
            offset,
        };
        self.messages
            .refresh(key, self.client.messages(session_id, limit, offset))
            .await
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.users.invalidate_all();
        self.stats.invalidate_all();
        self.sessions.invalidate_all();
        self.payments.invalidate_all();
        self.config.invalidate_all();
        self.convex_credentials.invalidate_all();
        self.github_credentials.invalidate_all();
        self.messages.invalidate_all();
    }

    fn invalidate_users(&self) {
        self.users.invalidate(&());
        self.stats.invalidate(&());
    }

    fn invalidate_sessions(&self) {
        self.sessions.invalidate(&());
        self.stats.invalidate(&());
    }

    // Mutators. Each delegates and, on success, drops the entries the
    // mutation may have changed so the next read refetches.

    pub async fn set_user_credits(&self, user_id: &str, credits_usd: f64) -> bool {
        let ok = self.client.set_user_credits(user_id, credits_usd).await;
        if ok {
            self.invalidate_users();
        }
        ok
    }

    pub async fn set_user_messages(&self, user_id: &str, messages_remaining: u64) -> bool {
        let ok = self.client.set_user_messages(user_id, messages_remaining).await;
        if ok {
            self.invalidate_users();
        }
        ok
    }

    pub async fn set_user_plan(
        &self,
        user_id: &str,
        plan: SubscriptionPlan,
        reset_messages: bool,
    ) -> bool {
        let ok = self.client.set_user_plan(user_id, plan, reset_messages).await;
        if ok {
            self.invalidate_users();
        }
        ok
    }

    pub async fn delete_user(&self, user_id: &str) -> bool {
        let ok = self.client.delete_user(user_id).await;
        if ok {
            // A deleted user takes their sessions and messages with them.
            self.invalidate_users();
            self.invalidate_sessions();
            self.messages.invalidate_all();
        }
        ok
    }

    pub async fn fix_missing_user_fields(&self) -> bool {
        let ok = self.client.fix_missing_user_fields().await;
        if ok {
            self.invalidate_users();
        }
        ok
    }

    pub async fn set_global_agent_type(&self, agent_type: AgentType) -> bool {
        let ok = self.client.set_global_agent_type(agent_type).await;
        if ok {
            self.config.invalidate(&());
        }
        ok
    }

    pub async fn update_session_status(&self, session_id: &str, status: SessionStatus) -> bool {
        let ok = self.client.update_session_status(session_id, status).await;
        if ok {
            self.invalidate_sessions();
        }
        ok
    }

    pub async fn update_session_push_status(
        &self,
        session_id: &str,
        push_status: GitHubPushStatus,
    ) -> bool {
        let ok = self
            .client
            .update_session_push_status(session_id, push_status)
            .await;
        if ok {
            self.invalidate_sessions();
        }
        ok
    }

    pub async fn broadcast_push(&self, title: &str, body: &str) -> bool {
        // Broadcasts change no cached resource.
        self.client.broadcast_push(title, body).await
    }

    pub async fn resume_sandbox(
        &self,
        sandbox_id_or_url: &str,
        timeout_ms: Option<u64>,
    ) -> ResumeSandboxOutcome {
        let outcome = self.client.resume_sandbox(sandbox_id_or_url, timeout_ms).await;
        if outcome.success {
            self.invalidate_sessions();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibracode_config::AdminApiConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn cached(server: &MockServer) -> CachedClient {
        let client = AdminClient::new(&AdminApiConfig {
            base_url: server.uri(),
            admin_token: "test-secret".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        CachedClient::with_ttl(client, Duration::from_secs(300))
    }

    fn users_body(ids: &[&str]) -> serde_json::Value {
        let users: Vec<_> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "_id": id,
                    "_creationTime": 1.0,
                    "clerkId": format!("clerk_{id}")
                })
            })
            .collect();
        serde_json::json!({"users": users, "total": ids.len(), "hasMore": false})
    }

    #[tokio::test]
    async fn repeated_reads_hit_the_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body(&["usr_1"])))
            .expect(1)
            .mount(&server)
            .await;

        let cached = cached(&server).await;
        let first = cached.users().await;
        let second = cached.users().await;
        assert_eq!(first.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn successful_mutation_invalidates_and_next_read_refetches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body(&["usr_1"])))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/admin/user/credits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let cached = cached(&server).await;
        assert_eq!(cached.users().await.len(), 1);

        assert!(cached.set_user_credits("usr_1", 10.0).await);

        // The first mock is exhausted; the refetch sees the updated list.
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(users_body(&["usr_1", "usr_2"])),
            )
            .mount(&server)
            .await;
        assert_eq!(cached.users().await.len(), 2);
    }

    #[tokio::test]
    async fn failed_mutation_keeps_the_cached_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body(&["usr_1"])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/admin/user/credits"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let cached = cached(&server).await;
        let before = cached.users().await;
        assert!(!cached.set_user_credits("usr_1", 10.0).await);
        let after = cached.users().await;
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn message_scopes_are_cached_independently() {
        let server = MockServer::start().await;
        let message = |id: &str, session: &str| {
            serde_json::json!({
                "_id": id,
                "_creationTime": 1.0,
                "sessionId": session,
                "role": "user",
                "content": "hello"
            })
        };
        Mock::given(method("GET"))
            .and(path("/admin/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "messages": [message("m1", "ses_1")],
                "total": 1,
                "hasMore": false
            })))
            .expect(2)
            .mount(&server)
            .await;

        let cached = cached(&server).await;
        cached.messages(Some("ses_1"), 100, 0).await;
        cached.messages(None, 100, 0).await;
        // Same scope again: served from cache, no third request.
        cached.messages(Some("ses_1"), 100, 0).await;
    }

    #[tokio::test]
    async fn refresh_bypasses_a_fresh_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body(&["usr_1"])))
            .expect(2)
            .mount(&server)
            .await;

        let cached = cached(&server).await;
        cached.users().await;
        cached.refresh_users().await;
    }
}
