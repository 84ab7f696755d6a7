use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::UserId;

pub type ActivityLogId = Uuid;

/// One immutable entry of a board's activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: ActivityLogId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLogEntry {
    pub fn new(id: ActivityLogId, user_id: Option<UserId>, details: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            details,
            timestamp,
        }
    }

    /// Case-insensitive substring match on the detail text.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty() || self.details.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Sort newest first.
pub fn sort_newest_first(entries: &mut [ActivityLogEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
