// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote access client for the Vibracode admin API.
//!
//! Three layers, strictest at the bottom:
//! - [`AdminTransport`]: authenticated GET/POST with a full error taxonomy.
//! - [`AdminClient`]: per-resource fetchers that collapse failures to empty
//!   defaults, and mutators that collapse them to booleans.
//! - [`CachedClient`]: staleness-window caching with invalidate-on-mutation.

mod cached;
mod fetchers;
mod mutators;
mod transport;
mod types;

pub use cached::CachedClient;
pub use fetchers::{AdminClient, DEFAULT_MESSAGE_LIMIT};
pub use mutators::DEFAULT_RESUME_TIMEOUT_MS;
pub use transport::AdminTransport;
pub use types::ResumeSandboxOutcome;
