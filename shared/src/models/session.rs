//! Session Model (访问会话)

use serde::{Deserialize, Serialize};

/// Open session payload
///
/// Employee sessions require a name; kitchen sessions ignore the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub employee_name: Option<String>,
}

/// Issued session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub token: String,
    /// employee | kitchen
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    pub expires_in_minutes: i64,
}
