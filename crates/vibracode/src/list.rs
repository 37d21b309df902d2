// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! List subcommands: each prints a derived-statistics header, then the
//! rows newest-first, optionally filtered by a search query.

use std::io::IsTerminal;

use colored::Colorize;
use vibracode_client::CachedClient;
use vibracode_core::{
    GlobalConfig, Message, PaymentTransaction, Session, User,
};
use vibracode_stats::{
    filter_messages, filter_payments, filter_sessions, filter_users, message_overview,
    payment_overview, session_overview, sort_newest_first, user_overview,
};

use crate::format::{compact_count, format_currency, format_date, or_dash, truncate_id};

fn heading(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// `vibracode users [--search Q]`
pub async fn run_users(client: &CachedClient, refresh: bool, search: &str) {
    let users = if refresh {
        client.refresh_users().await
    } else {
        client.users().await
    };
    let mut users: Vec<User> = (*users).clone();
    sort_newest_first(&mut users);

    let overview = user_overview(&users);
    println!("{}", heading("Users"));
    println!(
        "  total {}  paid {}  free {}",
        compact_count(overview.total as u64),
        compact_count(overview.paid as u64),
        compact_count(overview.free as u64),
    );
    println!();

    for user in filter_users(&users, search) {
        let plan = user
            .subscription_plan
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}  {:<30}  {:<12}  credits {}  joined {}",
            truncate_id(&user.id),
            user.display_name(),
            plan,
            format_currency(user.credits_usd.unwrap_or(0.0)),
            format_date(user.creation_time),
        );
    }
}

/// `vibracode sessions [--search Q]`
pub async fn run_sessions(client: &CachedClient, refresh: bool, search: &str) {
    let sessions = if refresh {
        client.refresh_sessions().await
    } else {
        client.sessions().await
    };
    let mut sessions: Vec<Session> = (*sessions).clone();
    sort_newest_first(&mut sessions);

    let overview = session_overview(&sessions);
    println!("{}", heading("Sessions"));
    println!(
        "  total {}  running {}  cost {}",
        compact_count(overview.total as u64),
        compact_count(overview.running as u64),
        format_currency(overview.total_cost_usd),
    );
    println!();

    for session in filter_sessions(&sessions, search) {
        println!(
            "  {}  {:<30}  {:<22}  {}  created {}",
            truncate_id(&session.id),
            session.name,
            session.status,
            format_currency(session.total_cost_usd.unwrap_or(0.0)),
            format_date(session.creation_time),
        );
    }
}

/// `vibracode messages [--session ID] [--limit N] [--offset N] [--search Q]`
pub async fn run_messages(
    client: &CachedClient,
    refresh: bool,
    session_id: Option<&str>,
    limit: u32,
    offset: u32,
    search: &str,
) {
    let messages = if refresh {
        client.refresh_messages(session_id, limit, offset).await
    } else {
        client.messages(session_id, limit, offset).await
    };
    let mut messages: Vec<Message> = (*messages).clone();
    sort_newest_first(&mut messages);

    let overview = message_overview(&messages);
    println!("{}", heading("Messages"));
    println!(
        "  total {}  user {}  assistant {}  cost {}",
        compact_count(overview.total as u64),
        compact_count(overview.user as u64),
        compact_count(overview.assistant as u64),
        format_currency(overview.total_cost_usd),
    );
    println!();

    for message in filter_messages(&messages, search) {
        let preview: String = message.content.chars().take(60).collect();
        let preview = preview.replace('\n', " ");
        let tool = message.tool_invocation().map(|t| t.label()).unwrap_or("-");
        println!(
            "  {}  {:<9}  {:<20}  {:<8}  {}  {}",
            truncate_id(&message.id),
            message.role,
            or_dash(message.model_used.as_deref()),
            tool,
            format_date(message.creation_time),
            preview,
        );
    }
}

/// `vibracode payments [--search Q]`
pub async fn run_payments(client: &CachedClient, refresh: bool, search: &str) {
    let payments = if refresh {
        client.refresh_payments().await
    } else {
        client.payments().await
    };
    let mut payments: Vec<PaymentTransaction> = (*payments).clone();
    sort_newest_first(&mut payments);

    let overview = payment_overview(&payments);
    println!("{}", heading("Payments"));
    println!(
        "  total {}  succeeded {}  revenue {}  refunds {}",
        compact_count(overview.total as u64),
        compact_count(overview.succeeded as u64),
        format_currency(overview.revenue),
        format_currency(overview.refunds),
    );
    println!();

    for payment in filter_payments(&payments, search) {
        println!(
            "  {}  {:<20}  {:<20}  {:<10}  {}  {}",
            truncate_id(&payment.id),
            truncate_id(&payment.transaction_id),
            payment.transaction_type,
            payment.status,
            format_currency(payment.amount),
            format_date(payment.created_at),
        );
    }
}

/// `vibracode config` (the listing; `config set-agent-type` mutates)
pub async fn run_config(client: &CachedClient, refresh: bool) {
    let config = if refresh {
        client.refresh_global_config().await
    } else {
        client.global_config().await
    };

    println!("{}", heading("Global configuration"));
    if config.is_empty() {
        println!("  (unavailable)");
        return;
    }
    for entry in config.iter() {
        print_config_entry(entry);
    }
}

fn print_config_entry(entry: &GlobalConfig) {
    println!(
        "  {:<12} = {:<10}  updated {}  by {}",
        entry.key,
        entry.value,
        format_date(entry.updated_at),
        or_dash(entry.updated_by.as_deref()),
    );
}

/// `vibracode credentials`: both credential listings plus the config
/// record, fetched concurrently.
pub async fn run_credentials(client: &CachedClient, refresh: bool) {
    let (convex, github, config) = if refresh {
        tokio::join!(
            client.refresh_convex_credentials(),
            client.refresh_github_credentials(),
            client.refresh_global_config(),
        )
    } else {
        tokio::join!(
            client.convex_credentials(),
            client.github_credentials(),
            client.global_config(),
        )
    };

    println!("{}", heading("Convex projects"));
    println!("  total {}", convex.len());
    for cred in convex.iter() {
        println!(
            "  {}  {:<24}  team {:<16}  key {}  created {}",
            truncate_id(&cred.id),
            cred.project_slug,
            cred.team_slug,
            cred.masked_deploy_key(),
            format_date(cred.created_at),
        );
    }

    println!();
    println!("{}", heading("GitHub connections"));
    println!("  total {}", github.len());
    for cred in github.iter() {
        println!(
            "  {}  {:<20}  token {}  connected {}",
            truncate_id(&cred.id),
            cred.username,
            cred.masked_token(),
            format_date(cred.connected_at),
        );
    }

    println!();
    println!("{}", heading("Global configuration"));
    for entry in config.iter() {
        print_config_entry(entry);
    }
}
