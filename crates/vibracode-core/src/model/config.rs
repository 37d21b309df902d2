// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Global configuration record.

use serde::{Deserialize, Serialize};

use super::CreationStamped;

/// A global configuration key/value pair.
///
/// The backend currently stores configuration as a single flat object; the
/// client reshapes it into this generic record so the rest of the codebase
/// handles config like any other listed entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    pub key: String,
    pub value: String,
    pub updated_at: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl CreationStamped for GlobalConfig {
    fn creation_time(&self) -> f64 {
        self.creation_time
    }
}
