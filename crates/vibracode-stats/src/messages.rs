// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived statistics over the fetched message list: role partition,
//! token/cost totals, and per-model cost grouping.

use std::collections::HashMap;

use vibracode_core::{Message, MessageRole};

/// Headline counters for the messages screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MessageOverview {
    pub total: usize,
    pub user: usize,
    pub assistant: usize,
    pub total_cost_usd: f64,
}

pub fn message_overview(messages: &[Message]) -> MessageOverview {
    let user = messages
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .count();
    MessageOverview {
        total: messages.len(),
        user,
        assistant: messages.len() - user,
        total_cost_usd: messages.iter().map(|m| m.cost_usd.unwrap_or(0.0)).sum(),
    }
}

/// Token, cost, and duration totals for a session's conversation, with a
/// per-model cost breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageBreakdown {
    pub total_cost_usd: f64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_read_tokens: u64,
    pub cache_creation_tokens: u64,
    pub total_duration_ms: f64,
    /// Cost per normalized model name. Only messages carrying both a model
    /// and a cost contribute.
    pub by_model: HashMap<String, f64>,
}

/// Fold the full message list into a [`UsageBreakdown`].
///
/// Absent numeric fields count as zero. The breakdown is recomputed from
/// scratch on every call -- it is never maintained incrementally.
pub fn usage_breakdown(messages: &[Message]) -> UsageBreakdown {
    let mut breakdown = UsageBreakdown::default();
    for msg in messages {
        breakdown.total_cost_usd += msg.cost_usd.unwrap_or(0.0);
        breakdown.input_tokens += msg.input_tokens.unwrap_or(0);
        breakdown.output_tokens += msg.output_tokens.unwrap_or(0);
        breakdown.cache_read_tokens += msg.cache_read_tokens.unwrap_or(0);
        breakdown.cache_creation_tokens += msg.cache_creation_tokens.unwrap_or(0);
        breakdown.total_duration_ms += msg.duration_ms.unwrap_or(0.0);
        if let (Some(model), Some(cost)) = (&msg.model_used, msg.cost_usd) {
            *breakdown
                .by_model
                .entry(normalize_model_name(model).to_string())
                .or_insert(0.0) += cost;
        }
    }
    breakdown
}

/// Last path segment of a slash-delimited model identifier.
///
/// `"anthropic/claude-sonnet-4"` and `"openrouter/claude-sonnet-4"` both
/// normalize to `"claude-sonnet-4"` so costs merge across providers.
pub fn normalize_model_name(model: &str) -> &str {
    model.rsplit('/').next().unwrap_or(model)
}

/// The per-model cost map as a list sorted by cost descending, for display.
pub fn sorted_model_costs(by_model: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut costs: Vec<(String, f64)> = by_model
        .iter()
        .map(|(model, cost)| (model.clone(), *cost))
        .collect();
    costs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    costs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::message_with;

    #[test]
    fn overview_partitions_by_role() {
        let messages = vec![
            message_with(MessageRole::User, None, None),
            message_with(MessageRole::Assistant, Some(0.1), None),
            message_with(MessageRole::Assistant, Some(0.2), None),
        ];
        let overview = message_overview(&messages);
        assert_eq!(overview.total, 3);
        assert_eq!(overview.user, 1);
        assert_eq!(overview.assistant, 2);
        assert!((overview.total_cost_usd - 0.3).abs() < 1e-9);
    }

    #[test]
    fn cost_by_model_keys_on_last_path_segment() {
        let messages = vec![
            message_with(MessageRole::Assistant, Some(0.5), Some("a/gpt-x")),
            message_with(MessageRole::Assistant, Some(0.25), Some("b/gpt-x")),
        ];
        let breakdown = usage_breakdown(&messages);
        assert_eq!(breakdown.by_model.len(), 1);
        assert!((breakdown.by_model["gpt-x"] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn model_without_cost_does_not_enter_breakdown() {
        let messages = vec![
            message_with(MessageRole::Assistant, None, Some("a/gpt-x")),
            message_with(MessageRole::Assistant, Some(0.1), None),
        ];
        let breakdown = usage_breakdown(&messages);
        assert!(breakdown.by_model.is_empty());
        assert!((breakdown.total_cost_usd - 0.1).abs() < 1e-9);
    }

    #[test]
    fn normalize_handles_plain_names() {
        assert_eq!(normalize_model_name("claude-sonnet-4"), "claude-sonnet-4");
        assert_eq!(normalize_model_name("anthropic/claude-sonnet-4"), "claude-sonnet-4");
        assert_eq!(normalize_model_name("a/b/c"), "c");
    }

    #[test]
    fn sorted_costs_descend() {
        let mut by_model = HashMap::new();
        by_model.insert("cheap".to_string(), 0.1);
        by_model.insert("pricey".to_string(), 2.0);
        by_model.insert("middle".to_string(), 0.5);
        let sorted = sorted_model_costs(&by_model);
        let names: Vec<&str> = sorted.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(names, vec!["pricey", "middle", "cheap"]);
    }

    #[test]
    fn usage_totals_treat_absent_as_zero() {
        let mut msg = message_with(MessageRole::Assistant, Some(0.042), Some("anthropic/claude-sonnet-4"));
        msg.input_tokens = Some(1200);
        msg.output_tokens = Some(300);
        msg.duration_ms = Some(5400.0);
        let bare = message_with(MessageRole::User, None, None);

        let breakdown = usage_breakdown(&[msg, bare]);
        assert_eq!(breakdown.input_tokens, 1200);
        assert_eq!(breakdown.output_tokens, 300);
        assert_eq!(breakdown.cache_read_tokens, 0);
        assert!((breakdown.total_duration_ms - 5400.0).abs() < 1e-9);
    }
}
