// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vibracode - admin console CLI for the Vibracode platform.
//!
//! Reads go through a staleness-window cache; `--refresh` forces a
//! refetch. Mutations invalidate the cached entries they touch and set
//! the process exit code on failure.

use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use strum_helpers::{parse_agent_type, parse_plan, parse_push_status, parse_session_status};
use vibracode_client::{AdminClient, CachedClient, DEFAULT_MESSAGE_LIMIT};
use vibracode_core::{AgentType, GitHubPushStatus, SessionStatus, SubscriptionPlan};

mod format;
mod list;
mod mutate;
mod stats;

/// Vibracode - admin console for the Vibracode platform.
#[derive(Parser, Debug)]
#[command(name = "vibracode", version, about, long_about = None)]
struct Cli {
    /// Bypass the resource cache and refetch from the backend.
    #[arg(long, global = true)]
    refresh: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List users with the paid/free breakdown.
    Users {
        /// Case-insensitive substring over name, email, clerk id, plan.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// List coding sessions with running count and total cost.
    Sessions {
        /// Case-insensitive substring over name, id, status, template.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// List messages, optionally scoped to one session.
    Messages {
        /// Only messages belonging to this session.
        #[arg(long)]
        session: Option<String>,
        #[arg(long, default_value_t = DEFAULT_MESSAGE_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        /// Case-insensitive substring over content, role, model.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// List payment transactions with revenue and refund totals.
    Payments {
        /// Case-insensitive substring over ids, type, status, description.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show or change the global configuration.
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// List Convex and GitHub credentials (secrets masked).
    Credentials,
    /// Dashboard overview across users, sessions, and messages.
    Stats,
    /// User mutations.
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Session mutations.
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
    /// Push notifications.
    Notify {
        #[command(subcommand)]
        command: NotifyCommands,
    },
    /// Backfill users missing post-migration fields.
    FixUsers,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Switch the platform-wide default agent.
    SetAgentType {
        /// One of: cursor, claude, gemini.
        #[arg(value_parser = parse_agent_type)]
        agent_type: AgentType,
    },
}

#[derive(Subcommand, Debug)]
enum UserCommands {
    /// Overwrite a user's credit balance (USD).
    SetCredits {
        user_id: String,
        credits_usd: f64,
    },
    /// Overwrite a user's remaining message allowance.
    SetMessages {
        user_id: String,
        messages_remaining: u64,
    },
    /// Change a user's subscription plan.
    SetPlan {
        user_id: String,
        /// One of: free, weekly_plus, pro, business, enterprise.
        #[arg(value_parser = parse_plan)]
        plan: SubscriptionPlan,
        /// Also reset the message allowance to the new plan's quota.
        #[arg(long)]
        reset_messages: bool,
    },
    /// Delete a user and their owned records.
    Delete { user_id: String },
}

#[derive(Subcommand, Debug)]
enum SessionCommands {
    /// Force a session into a lifecycle status.
    SetStatus {
        session_id: String,
        /// Wire-format status name, e.g. RUNNING or PUSH_FAILED.
        #[arg(value_parser = parse_session_status)]
        status: SessionStatus,
    },
    /// Overwrite a session's GitHub push state.
    SetPushStatus {
        session_id: String,
        /// One of: pending, in_progress, completed, failed.
        #[arg(value_parser = parse_push_status)]
        push_status: GitHubPushStatus,
    },
    /// Resume a stopped sandbox by id or preview URL.
    ResumeSandbox {
        sandbox: String,
        /// Time budget in milliseconds (default 600000).
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

#[derive(Subcommand, Debug)]
enum NotifyCommands {
    /// Send a push notification to every registered device.
    Broadcast {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
}

mod strum_helpers {
    //! Clap value parsers backed by the enums' strum `FromStr` impls.

    use super::*;
    use strum::IntoEnumIterator;

    pub fn parse_plan(s: &str) -> Result<SubscriptionPlan, String> {
        SubscriptionPlan::from_str(s)
            .map_err(|_| format!("unknown plan '{s}' (free, weekly_plus, pro, business, enterprise)"))
    }

    pub fn parse_agent_type(s: &str) -> Result<AgentType, String> {
        AgentType::from_str(s).map_err(|_| format!("unknown agent type '{s}' (cursor, claude, gemini)"))
    }

    pub fn parse_session_status(s: &str) -> Result<SessionStatus, String> {
        SessionStatus::from_str(s).map_err(|_| {
            let valid: Vec<String> = SessionStatus::iter().map(|v| v.to_string()).collect();
            format!("unknown session status '{s}' (one of: {})", valid.join(", "))
        })
    }

    pub fn parse_push_status(s: &str) -> Result<GitHubPushStatus, String> {
        GitHubPushStatus::from_str(s)
            .map_err(|_| format!("unknown push status '{s}' (pending, in_progress, completed, failed)"))
    }
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("vibracode={level},warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match vibracode_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            vibracode_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log.level);

    let client = match AdminClient::new(&config.admin) {
        Ok(client) => CachedClient::new(client, &config.cache),
        Err(err) => {
            eprintln!("vibracode: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(base_url = %config.admin.base_url, ttl_secs = config.cache.ttl_secs, "client ready");

    let refresh = cli.refresh;
    let ok = match cli.command {
        Commands::Users { search } => {
            list::run_users(&client, refresh, &search).await;
            true
        }
        Commands::Sessions { search } => {
            list::run_sessions(&client, refresh, &search).await;
            true
        }
        Commands::Messages {
            session,
            limit,
            offset,
            search,
        } => {
            list::run_messages(&client, refresh, session.as_deref(), limit, offset, &search)
                .await;
            true
        }
        Commands::Payments { search } => {
            list::run_payments(&client, refresh, &search).await;
            true
        }
        Commands::Config { command: None } => {
            list::run_config(&client, refresh).await;
            true
        }
        Commands::Config {
            command: Some(ConfigCommands::SetAgentType { agent_type }),
        } => mutate::run_set_agent_type(&client, agent_type).await,
        Commands::Credentials => {
            list::run_credentials(&client, refresh).await;
            true
        }
        Commands::Stats => {
            stats::run_stats(&client, refresh).await;
            true
        }
        Commands::User { command } => match command {
            UserCommands::SetCredits {
                user_id,
                credits_usd,
            } => mutate::run_set_credits(&client, &user_id, credits_usd).await,
            UserCommands::SetMessages {
                user_id,
                messages_remaining,
            } => mutate::run_set_messages(&client, &user_id, messages_remaining).await,
            UserCommands::SetPlan {
                user_id,
                plan,
                reset_messages,
            } => mutate::run_set_plan(&client, &user_id, plan, reset_messages).await,
            UserCommands::Delete { user_id } => mutate::run_delete_user(&client, &user_id).await,
        },
        Commands::Session { command } => match command {
            SessionCommands::SetStatus { session_id, status } => {
                mutate::run_set_status(&client, &session_id, status).await
            }
            SessionCommands::SetPushStatus {
                session_id,
                push_status,
            } => mutate::run_set_push_status(&client, &session_id, push_status).await,
            SessionCommands::ResumeSandbox {
                sandbox,
                timeout_ms,
            } => mutate::run_resume_sandbox(&client, &sandbox, timeout_ms).await,
        },
        Commands::Notify { command } => match command {
            NotifyCommands::Broadcast { title, body } => {
                mutate::run_broadcast(&client, &title, &body).await
            }
        },
        Commands::FixUsers => mutate::run_fix_users(&client).await,
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
