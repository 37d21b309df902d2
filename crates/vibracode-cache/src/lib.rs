// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyed staleness cache for fetched admin resources.
//!
//! The presentation layer keeps one short-lived cache entry per resource;
//! this crate provides that store with an injectable clock so staleness is
//! testable without sleeping.

pub mod clock;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::ResourceCache;
