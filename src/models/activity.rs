use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of a logged user action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Watch,
    Rate,
    Review,
    Follow,
    Unfollow,
}

/// One entry of a user's append-only activity log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: ActivityKind,
    pub item_id: Option<u32>,
    pub rating: Option<u8>,
    pub target_user_id: Option<Uuid>,
}

impl ActivityEvent {
    /// Creates a bare event; item, rating, and target user default to absent
    pub fn new(timestamp: DateTime<Utc>, kind: ActivityKind) -> Self {
        Self {
            timestamp,
            kind,
            item_id: None,
            rating: None,
            target_user_id: None,
        }
    }
}

/// Lookback window for activity aggregation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
}

/// Per-day activity counts, derived on demand
///
/// `date` is the UTC calendar date in `YYYY-MM-DD` form. Follows and unfollows
/// share `follow_count`: the metric is social-graph churn, not net change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityDataPoint {
    pub date: String,
    pub watch_count: u32,
    pub rating_count: u32,
    pub review_count: u32,
    pub follow_count: u32,
}
