// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The admin entity data model.
//!
//! All entities are immutable snapshots of server-side records, deserialized
//! from the backend's camelCase JSON (Convex-style `_id` / `_creationTime`
//! system fields). This client never owns persistent state; entities are
//! created and destroyed exclusively server-side.

pub mod config;
pub mod credentials;
pub mod message;
pub mod payment;
pub mod session;
pub mod stats;
pub mod user;

/// Every listed entity carries a server-assigned creation timestamp
/// (milliseconds since the Unix epoch). Used for newest-first sorting.
pub trait CreationStamped {
    fn creation_time(&self) -> f64;
}
