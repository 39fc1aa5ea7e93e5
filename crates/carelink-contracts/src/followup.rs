//! Recovery follow-up records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported trend of a tracked condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpStatus {
    Improved,
    Same,
    Worsened,
}

/// One tracked condition.
///
/// Records are never deleted. A resolved record becomes inactive and loses
/// its next check-in; `next_check_in.is_some() == active` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpRecord {
    pub id: String,
    pub condition_label: String,
    pub start_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
    pub status: FollowUpStatus,
    pub next_check_in: Option<DateTime<Utc>>,
    pub active: bool,
}
