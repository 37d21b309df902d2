// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived statistics over the fetched session list.

use vibracode_core::Session;

/// Headline counters for the sessions screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionOverview {
    pub total: usize,
    pub running: usize,
    /// Sum of per-session cost, absent costs counting as zero.
    pub total_cost_usd: f64,
}

pub fn session_overview(sessions: &[Session]) -> SessionOverview {
    let mut overview = SessionOverview {
        total: sessions.len(),
        ..Default::default()
    };
    for session in sessions {
        if session.is_running() {
            overview.running += 1;
        }
        overview.total_cost_usd += session.total_cost_usd.unwrap_or(0.0);
    }
    overview
}
