// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session entity and its lifecycle enums.
//!
//! `SessionStatus` and `GitHubPushStatus` are flat enumerations with no
//! transition table: the admin API accepts any value from any prior value,
//! which is what lets an operator force-correct a stuck workflow.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::CreationStamped;

/// Lifecycle stage of a coding session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    InProgress,
    CloningRepo,
    InstallingDependencies,
    StartingDevServer,
    CreatingTunnel,
    Custom,
    Running,
    CreatingGithubRepo,
    SettingUpSandbox,
    InitializingGit,
    AddingFiles,
    CommittingChanges,
    PushingToGithub,
    PushComplete,
    PushFailed,
    AutoPushing,
    UsingExistingRepo,
}

/// State of publishing a session's code to GitHub, tracked independently
/// of the session's own lifecycle status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GitHubPushStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// Convex project backing a session's generated app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvexProject {
    pub deployment_name: String,
    pub deployment_url: String,
    pub admin_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_slug: Option<String>,
}

/// A coding session as returned by `GET /admin/sessions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub name: String,
    pub template_id: String,
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    // Sandbox / preview environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunnel_url: Option<String>,

    // Repository linkage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repository_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_push_status: Option<GitHubPushStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_push_date: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,

    // Cost and message counters.
    #[serde(rename = "totalCostUSD", default, skip_serializing_if = "Option::is_none")]
    pub total_cost_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_cost_update: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convex_project: Option<ConvexProject>,
}

impl Session {
    /// Whether the session is currently live and serving its dev server.
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }
}

impl CreationStamped for Session {
    fn creation_time(&self) -> f64 {
        self.creation_time
    }
}
