// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side derived statistics for the Vibracode admin console.
//!
//! Every function here is a pure fold over an already-fetched list. The
//! screens recompute these on every render from the full cached list, so
//! none of them maintain state and all are order-insensitive (sorting is a
//! separate, explicit step in [`search`]).

pub mod messages;
pub mod payments;
pub mod search;
pub mod sessions;
pub mod users;

pub use messages::{
    MessageOverview, UsageBreakdown, message_overview, normalize_model_name, sorted_model_costs,
    usage_breakdown,
};
pub use payments::{PaymentOverview, payment_overview};
pub use search::{
    filter_messages, filter_payments, filter_sessions, filter_users, sort_newest_first,
};
pub use sessions::{SessionOverview, session_overview};
pub use users::{push_registered_count, total_credits_usd, user_overview, users_by_plan, UserOverview};

#[cfg(test)]
pub(crate) mod test_fixtures {
    //! Minimal entity builders for fold tests.

    use vibracode_core::{
        Message, MessageRole, PaymentStatus, PaymentTransaction, PaymentType, Session,
        SessionStatus, SubscriptionPlan, User,
    };

    pub fn user_with_plan(plan: Option<SubscriptionPlan>) -> User {
        let mut value = serde_json::json!({
            "_id": "usr_test",
            "_creationTime": 1.0,
            "clerkId": "clerk_test"
        });
        if let Some(plan) = plan {
            value["subscriptionPlan"] = serde_json::to_value(plan).unwrap();
        }
        serde_json::from_value(value).unwrap()
    }

    pub fn session_with(status: SessionStatus, cost_usd: Option<f64>) -> Session {
        let mut value = serde_json::json!({
            "_id": "ses_test",
            "_creationTime": 1.0,
            "name": "test session",
            "templateId": "vite-react",
            "status": serde_json::to_value(status).unwrap()
        });
        if let Some(cost) = cost_usd {
            value["totalCostUSD"] = serde_json::json!(cost);
        }
        serde_json::from_value(value).unwrap()
    }

    pub fn message_with(role: MessageRole, cost_usd: Option<f64>, model: Option<&str>) -> Message {
        let mut value = serde_json::json!({
            "_id": "msg_test",
            "_creationTime": 1.0,
            "sessionId": "ses_test",
            "role": serde_json::to_value(role).unwrap(),
            "content": "hello"
        });
        if let Some(cost) = cost_usd {
            value["costUSD"] = serde_json::json!(cost);
        }
        if let Some(model) = model {
            value["modelUsed"] = serde_json::json!(model);
        }
        serde_json::from_value(value).unwrap()
    }

    pub fn payment_with(
        transaction_type: PaymentType,
        status: PaymentStatus,
        amount: f64,
    ) -> PaymentTransaction {
        serde_json::from_value(serde_json::json!({
            "_id": "txn_test",
            "_creationTime": 1.0,
            "userId": "usr_test",
            "transactionId": "pi_test",
            "type": serde_json::to_value(transaction_type).unwrap(),
            "amount": amount,
            "currency": "usd",
            "status": serde_json::to_value(status).unwrap(),
            "processedAt": 2.0,
            "createdAt": 1.0
        }))
        .unwrap()
    }
}
