// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived statistics over the fetched user list.

use std::collections::HashMap;

use vibracode_core::{SubscriptionPlan, User};

/// Paid/free partition of the user base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserOverview {
    pub total: usize,
    pub paid: usize,
    pub free: usize,
}

/// Single-pass partition of users by whether their plan is a paying tier.
///
/// A user with no plan set counts as free.
pub fn user_overview(users: &[User]) -> UserOverview {
    let paid = users.iter().filter(|u| u.is_paid()).count();
    UserOverview {
        total: users.len(),
        paid,
        free: users.len() - paid,
    }
}

/// Count of users per subscription plan. Users with no plan are skipped.
pub fn users_by_plan(users: &[User]) -> HashMap<SubscriptionPlan, usize> {
    let mut counts = HashMap::new();
    for user in users {
        if let Some(plan) = user.subscription_plan {
            *counts.entry(plan).or_insert(0) += 1;
        }
    }
    counts
}

/// How many users have a registered push-notification device.
pub fn push_registered_count(users: &[User]) -> usize {
    users.iter().filter(|u| u.has_push_token()).count()
}

/// Total outstanding credit balance across all users, in USD.
///
/// Absent balances count as zero.
pub fn total_credits_usd(users: &[User]) -> f64 {
    users.iter().map(|u| u.credits_usd.unwrap_or(0.0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::user_with_plan;

    #[test]
    fn plan_partition_counts_paid_and_free() {
        let users = vec![
            user_with_plan(Some(SubscriptionPlan::Free)),
            user_with_plan(Some(SubscriptionPlan::Pro)),
            user_with_plan(Some(SubscriptionPlan::Free)),
            user_with_plan(Some(SubscriptionPlan::Enterprise)),
        ];
        let overview = user_overview(&users);
        assert_eq!(overview.total, 4);
        assert_eq!(overview.paid, 2);
        assert_eq!(overview.free, 2);
    }

    #[test]
    fn missing_plan_counts_as_free() {
        let users = vec![user_with_plan(None), user_with_plan(Some(SubscriptionPlan::Pro))];
        let overview = user_overview(&users);
        assert_eq!(overview.paid, 1);
        assert_eq!(overview.free, 1);
    }

    #[test]
    fn by_plan_groups_and_skips_unset() {
        let users = vec![
            user_with_plan(Some(SubscriptionPlan::Pro)),
            user_with_plan(Some(SubscriptionPlan::Pro)),
            user_with_plan(Some(SubscriptionPlan::Business)),
            user_with_plan(None),
        ];
        let counts = users_by_plan(&users);
        assert_eq!(counts[&SubscriptionPlan::Pro], 2);
        assert_eq!(counts[&SubscriptionPlan::Business], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn push_count_requires_non_empty_token() {
        let mut with_token = user_with_plan(None);
        with_token.push_token = Some("ExponentPushToken[abc]".into());
        let mut empty_token = user_with_plan(None);
        empty_token.push_token = Some(String::new());
        let without = user_with_plan(None);

        assert_eq!(push_registered_count(&[with_token, empty_token, without]), 1);
    }

    #[test]
    fn credits_treat_absent_as_zero() {
        let mut a = user_with_plan(None);
        a.credits_usd = Some(10.5);
        let b = user_with_plan(None);
        assert_eq!(total_credits_usd(&[a, b]), 10.5);
    }
}
