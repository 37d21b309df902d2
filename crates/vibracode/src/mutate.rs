// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mutation subcommands. Each prints a one-line outcome and reports
//! success back to `main` for the process exit code.

use vibracode_client::CachedClient;
use vibracode_core::{AgentType, GitHubPushStatus, SessionStatus, SubscriptionPlan};
use vibracode_stats::push_registered_count;

use crate::format::format_currency;

fn report(ok: bool, action: &str) -> bool {
    if ok {
        println!("ok: {action}");
    } else {
        eprintln!("failed: {action}");
    }
    ok
}

pub async fn run_set_credits(client: &CachedClient, user_id: &str, credits_usd: f64) -> bool {
    let ok = client.set_user_credits(user_id, credits_usd).await;
    report(
        ok,
        &format!("set credits of {user_id} to {}", format_currency(credits_usd)),
    )
}

pub async fn run_set_messages(client: &CachedClient, user_id: &str, remaining: u64) -> bool {
    let ok = client.set_user_messages(user_id, remaining).await;
    report(ok, &format!("set remaining messages of {user_id} to {remaining}"))
}

pub async fn run_set_plan(
    client: &CachedClient,
    user_id: &str,
    plan: SubscriptionPlan,
    reset_messages: bool,
) -> bool {
    let ok = client.set_user_plan(user_id, plan, reset_messages).await;
    let reset = if reset_messages { " (messages reset)" } else { "" };
    report(ok, &format!("set plan of {user_id} to {plan}{reset}"))
}

pub async fn run_delete_user(client: &CachedClient, user_id: &str) -> bool {
    let ok = client.delete_user(user_id).await;
    report(ok, &format!("delete user {user_id}"))
}

pub async fn run_set_agent_type(client: &CachedClient, agent_type: AgentType) -> bool {
    let ok = client.set_global_agent_type(agent_type).await;
    report(ok, &format!("set global agent type to {agent_type}"))
}

pub async fn run_set_status(
    client: &CachedClient,
    session_id: &str,
    status: SessionStatus,
) -> bool {
    let ok = client.update_session_status(session_id, status).await;
    report(ok, &format!("set status of {session_id} to {status}"))
}

pub async fn run_set_push_status(
    client: &CachedClient,
    session_id: &str,
    push_status: GitHubPushStatus,
) -> bool {
    let ok = client
        .update_session_push_status(session_id, push_status)
        .await;
    report(ok, &format!("set push status of {session_id} to {push_status}"))
}

/// Resume a stopped sandbox and print the enriched outcome: the preview
/// URL on success, the backend's own error when it reports one, or the
/// generic transport failure.
pub async fn run_resume_sandbox(
    client: &CachedClient,
    sandbox: &str,
    timeout_ms: Option<u64>,
) -> bool {
    let outcome = client.resume_sandbox(sandbox, timeout_ms).await;
    if outcome.success {
        println!("ok: sandbox resumed");
        if let Some(id) = &outcome.sandbox_id {
            println!("  sandbox: {id}");
        }
        if let Some(url) = &outcome.app_url {
            println!("  app url: {url}");
        }
        if let Some(timeout) = outcome.timeout_ms {
            println!("  timeout: {timeout} ms");
        }
    } else {
        match &outcome.error {
            Some(error) => eprintln!("failed: {error}"),
            None => eprintln!("failed: sandbox resume rejected"),
        }
    }
    outcome.success
}

/// Broadcast a push notification, reporting the registered device count
/// before sending.
pub async fn run_broadcast(client: &CachedClient, title: &str, body: &str) -> bool {
    let users = client.users().await;
    let devices = push_registered_count(&users);
    println!("broadcasting to {devices} registered device(s)");

    let ok = client.broadcast_push(title, body).await;
    report(ok, &format!("broadcast \"{title}\""))
}

pub async fn run_fix_users(client: &CachedClient) -> bool {
    let ok = client.fix_missing_user_fields().await;
    report(ok, "backfill missing user fields")
}
