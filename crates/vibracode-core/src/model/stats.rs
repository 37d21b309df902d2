// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregate counters served by `GET /admin/stats`.

use serde::{Deserialize, Serialize};

/// Backend-computed aggregate counts for the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub active_subscriptions: u64,
    pub total_sessions: u64,
    pub running_sessions: u64,
    pub total_revenue: f64,
    pub total_messages: u64,
}
