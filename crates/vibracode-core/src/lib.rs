// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Vibracode admin client.
//!
//! This crate provides the error type and the entity data model shared by
//! the client, statistics, and CLI crates. The model mirrors the admin
//! backend's wire format exactly; higher layers never invent fields.

pub mod error;
pub mod model;

// Re-export key items at crate root for ergonomic imports.
pub use error::VibracodeError;
pub use model::CreationStamped;
pub use model::config::GlobalConfig;
pub use model::credentials::{ConvexProjectCredentials, GitHubCredentials};
pub use model::message::{Message, MessageRole, ToolInvocation};
pub use model::payment::{PaymentStatus, PaymentTransaction, PaymentType};
pub use model::session::{GitHubPushStatus, Session, SessionStatus};
pub use model::stats::AdminStats;
pub use model::user::{AgentType, BillingMode, MigrationStatus, SubscriptionPlan, User};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_stats_uses_camel_case_wire_names() {
        let stats = AdminStats {
            total_users: 10,
            active_subscriptions: 3,
            total_revenue: 99.5,
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalUsers"], 10);
        assert_eq!(json["activeSubscriptions"], 3);
        assert_eq!(json["totalRevenue"], 99.5);
    }

    #[test]
    fn every_listed_entity_is_creation_stamped() {
        fn assert_stamped<T: CreationStamped>() {}
        assert_stamped::<User>();
        assert_stamped::<Session>();
        assert_stamped::<Message>();
        assert_stamped::<PaymentTransaction>();
        assert_stamped::<GlobalConfig>();
        assert_stamped::<ConvexProjectCredentials>();
        assert_stamped::<GitHubCredentials>();
    }
}
