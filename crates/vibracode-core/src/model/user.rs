// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User entity and subscription/billing enums.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::CreationStamped;

/// Subscription tier a user is currently on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubscriptionPlan {
    Free,
    WeeklyPlus,
    Pro,
    Business,
    Enterprise,
}

impl SubscriptionPlan {
    /// Whether this plan is a paying tier.
    pub fn is_paid(self) -> bool {
        !matches!(self, SubscriptionPlan::Free)
    }
}

/// Which coding-assistant backend processes a user's messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AgentType {
    Cursor,
    Claude,
    Gemini,
}

/// How usage is billed for a user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BillingMode {
    Tokens,
    Credits,
}

/// State of a user's billing-system migration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MigrationStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// A Vibracode user as returned by `GET /admin/users`.
///
/// Snapshot of the server-side record; this client never mutates a `User`
/// locally, it only submits partial-update requests and refetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    pub clerk_id: String,

    // Profile fields mirrored from the identity provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    // Subscription and billing identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_plan: Option<SubscriptionPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_date: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_status: Option<MigrationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_expires_at: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_period_end: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_canceled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_trial_period: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_renew: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_granted_transaction_id: Option<String>,

    // Message quota counters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_remaining: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_used: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_reset: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<AgentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<BillingMode>,

    // Credit counters, all in USD.
    #[serde(rename = "creditsUSD", default, skip_serializing_if = "Option::is_none")]
    pub credits_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_used: Option<f64>,
    #[serde(rename = "totalPaidUSD", default, skip_serializing_if = "Option::is_none")]
    pub total_paid_usd: Option<f64>,
    #[serde(rename = "realCostUSD", default, skip_serializing_if = "Option::is_none")]
    pub real_cost_usd: Option<f64>,
    #[serde(rename = "profitUSD", default, skip_serializing_if = "Option::is_none")]
    pub profit_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_cost_update: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_payment_date: Option<f64>,

    // Push notification registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_token: Option<String>,
}

impl User {
    /// Best display name available: full name, then email, then clerk id.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.clerk_id)
    }

    /// Whether this user is on a paying plan.
    pub fn is_paid(&self) -> bool {
        self.subscription_plan.is_some_and(SubscriptionPlan::is_paid)
    }

    /// Whether this user has registered a device for push notifications.
    pub fn has_push_token(&self) -> bool {
        self.push_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl CreationStamped for User {
    fn creation_time(&self) -> f64 {
        self.creation_time
    }
}
