// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Newest-first sorting and case-insensitive text filtering.
//!
//! Lists are sorted by creation time before any text filtering is applied,
//! matching the order the admin screens render in.

use vibracode_core::{CreationStamped, Message, PaymentTransaction, Session, User};

/// Sort a list newest-first by server-assigned creation time.
pub fn sort_newest_first<T: CreationStamped>(items: &mut [T]) {
    items.sort_by(|a, b| {
        b.creation_time()
            .partial_cmp(&a.creation_time())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn matches(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

/// Users matching `query` on clerk id, name fields, email, or plan.
///
/// An empty or whitespace-only query keeps everything.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let query = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            query.is_empty()
                || matches(Some(&u.clerk_id), &query)
                || matches(u.full_name.as_deref(), &query)
                || matches(u.first_name.as_deref(), &query)
                || matches(u.last_name.as_deref(), &query)
                || matches(u.email.as_deref(), &query)
                || u.subscription_plan
                    .is_some_and(|p| p.to_string().contains(&query))
        })
        .collect()
}

/// Sessions matching `query` on name, id, status, or template id.
pub fn filter_sessions<'a>(sessions: &'a [Session], query: &str) -> Vec<&'a Session> {
    let query = query.trim().to_lowercase();
    sessions
        .iter()
        .filter(|s| {
            query.is_empty()
                || matches(Some(&s.name), &query)
                || matches(Some(&s.id), &query)
                || s.status.to_string().to_lowercase().contains(&query)
                || matches(Some(&s.template_id), &query)
        })
        .collect()
}

/// Messages matching `query` on content, role, or model.
pub fn filter_messages<'a>(messages: &'a [Message], query: &str) -> Vec<&'a Message> {
    let query = query.trim().to_lowercase();
    messages
        .iter()
        .filter(|m| {
            query.is_empty()
                || matches(Some(&m.content), &query)
                || m.role.to_string().contains(&query)
                || matches(m.model_used.as_deref(), &query)
        })
        .collect()
}

/// Payments matching `query` on transaction id, user id, type, status, or
/// description.
pub fn filter_payments<'a>(
    payments: &'a [PaymentTransaction],
    query: &str,
) -> Vec<&'a PaymentTransaction> {
    let query = query.trim().to_lowercase();
    payments
        .iter()
        .filter(|p| {
            query.is_empty()
                || matches(Some(&p.transaction_id), &query)
                || matches(Some(&p.user_id), &query)
                || p.transaction_type.to_string().contains(&query)
                || p.status.to_string().contains(&query)
                || matches(p.description.as_deref(), &query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{message_with, session_with, user_with_plan};
    use vibracode_core::{MessageRole, SessionStatus, SubscriptionPlan};

    #[test]
    fn sort_orders_newest_first() {
        let mut messages = vec![
            message_with(MessageRole::User, None, None),
            message_with(MessageRole::User, None, None),
            message_with(MessageRole::User, None, None),
        ];
        messages[0].creation_time = 100.0;
        messages[1].creation_time = 300.0;
        messages[2].creation_time = 200.0;

        sort_newest_first(&mut messages);
        let times: Vec<f64> = messages.iter().map(|m| m.creation_time).collect();
        assert_eq!(times, vec![300.0, 200.0, 100.0]);
    }

    #[test]
    fn empty_query_keeps_everything() {
        let users = vec![user_with_plan(None), user_with_plan(None)];
        assert_eq!(filter_users(&users, "").len(), 2);
        assert_eq!(filter_users(&users, "   ").len(), 2);
    }

    #[test]
    fn user_filter_is_case_insensitive_over_email_and_plan() {
        let mut alice = user_with_plan(Some(SubscriptionPlan::Pro));
        alice.email = Some("Alice@Example.com".into());
        let bob = user_with_plan(Some(SubscriptionPlan::Free));

        let users = vec![alice, bob];
        assert_eq!(filter_users(&users, "alice").len(), 1);
        assert_eq!(filter_users(&users, "PRO").len(), 1);
        assert_eq!(filter_users(&users, "nobody").len(), 0);
    }

    #[test]
    fn session_filter_matches_status_text() {
        let sessions = vec![
            session_with(SessionStatus::Running, None),
            session_with(SessionStatus::PushFailed, None),
        ];
        assert_eq!(filter_sessions(&sessions, "push_failed").len(), 1);
        assert_eq!(filter_sessions(&sessions, "running").len(), 1);
    }

    #[test]
    fn message_filter_matches_content_and_model() {
        let mut with_model = message_with(MessageRole::Assistant, Some(0.1), Some("a/gpt-x"));
        with_model.content = "refactored the header".into();
        let other = message_with(MessageRole::User, None, None);

        let messages = vec![with_model, other];
        assert_eq!(filter_messages(&messages, "header").len(), 1);
        assert_eq!(filter_messages(&messages, "gpt-x").len(), 1);
        assert_eq!(filter_messages(&messages, "assistant").len(), 1);
    }
}
