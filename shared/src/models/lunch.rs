//! Lunch Model (午餐签到)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee view of today's lunch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LunchStatus {
    pub date: NaiveDate,
    pub checked_in: bool,
    pub count: usize,
}

/// Toggle check-in payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LunchToggle {
    #[serde(default)]
    pub checked_in: Option<bool>,
}

/// Kitchen view of a day's lunch attendance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LunchSummary {
    pub date: NaiveDate,
    pub names: Vec<String>,
    pub count: usize,
    /// Expected head count from same-weekday history
    pub predicted: Option<u32>,
}

/// Global "lunch is served" flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchReady {
    pub is_ready: bool,
    /// Unix millis of the last change
    pub updated_at: Option<i64>,
}

/// Set lunch-ready payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LunchReadyUpdate {
    #[serde(default)]
    pub ready: Option<bool>,
}
