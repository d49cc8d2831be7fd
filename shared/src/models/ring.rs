//! Ring Event Model (呼叫厨房)

use serde::{Deserialize, Serialize};

/// "Need attention" notification raised by an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingEvent {
    pub id: u64,
    pub employee_name: String,
    /// Unix millis
    pub created_at: i64,
    pub message: Option<String>,
}

/// Raise ring payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RingCreate {
    #[serde(default)]
    pub message: Option<String>,
}
