// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vibracode stats`: the dashboard overview, combining backend aggregates
//! with folds over the cached session and message lists.

use std::io::IsTerminal;

use colored::Colorize;
use vibracode_client::{CachedClient, DEFAULT_MESSAGE_LIMIT};
use vibracode_stats::{
    message_overview, session_overview, sorted_model_costs, usage_breakdown,
};

use crate::format::{compact_count, format_currency};

pub async fn run_stats(client: &CachedClient, refresh: bool) {
    let (stats, sessions, messages) = if refresh {
        tokio::join!(
            client.refresh_stats(),
            client.refresh_sessions(),
            client.refresh_messages(None, DEFAULT_MESSAGE_LIMIT, 0),
        )
    } else {
        tokio::join!(
            client.stats(),
            client.sessions(),
            client.messages(None, DEFAULT_MESSAGE_LIMIT, 0),
        )
    };

    let session_stats = session_overview(&sessions);
    let message_stats = message_overview(&messages);
    let usage = usage_breakdown(&messages);

    let title = if std::io::stdout().is_terminal() {
        "Vibracode overview".bold().to_string()
    } else {
        "Vibracode overview".to_string()
    };
    println!("{title}");
    println!(
        "  users:     {} total, {} active subscriptions",
        compact_count(stats.total_users),
        compact_count(stats.active_subscriptions),
    );
    println!(
        "  revenue:   {}",
        format_currency(stats.total_revenue),
    );
    println!(
        "  sessions:  {} total, {} running, {} spent",
        compact_count(session_stats.total as u64),
        compact_count(session_stats.running as u64),
        format_currency(session_stats.total_cost_usd),
    );
    println!(
        "  messages:  {} recent ({} user / {} assistant), {} cost",
        compact_count(message_stats.total as u64),
        compact_count(message_stats.user as u64),
        compact_count(message_stats.assistant as u64),
        format_currency(message_stats.total_cost_usd),
    );

    let by_model = sorted_model_costs(&usage.by_model);
    if !by_model.is_empty() {
        println!("  cost by model:");
        for (model, cost) in by_model {
            println!("    {:<28} {}", model, format_currency(cost));
        }
    }
}
