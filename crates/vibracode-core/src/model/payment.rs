// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payment transaction entity and its closed enums.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::CreationStamped;

/// Kind of ledger entry a transaction represents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentType {
    Payment,
    Refund,
    Chargeback,
    Adjustment,
    SubscriptionChange,
    FailedPayment,
}

impl PaymentType {
    /// Refunds and chargebacks take money back from revenue.
    pub fn is_money_returned(self) -> bool {
        matches!(self, PaymentType::Refund | PaymentType::Chargeback)
    }
}

/// Processing state of a transaction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
    Disputed,
}

/// A payment ledger row as returned by `GET /admin/transactions`.
///
/// `amount` is signed: refunds and chargebacks may carry negative values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    pub user_id: String,
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub transaction_type: PaymentType,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_added: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_plan: Option<String>,
    pub processed_at: f64,
    pub created_at: f64,

    // Provider identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_payment_intent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_invoice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_charge_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_session_id: Option<String>,
}

impl PaymentTransaction {
    /// A transaction counts toward revenue only when it is a succeeded payment.
    pub fn counts_as_revenue(&self) -> bool {
        self.transaction_type == PaymentType::Payment && self.status == PaymentStatus::Succeeded
    }
}

impl CreationStamped for PaymentTransaction {
    fn creation_time(&self) -> f64 {
        self.creation_time
    }
}
