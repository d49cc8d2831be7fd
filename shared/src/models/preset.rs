//! Preset Model (常用点单模板)

use serde::{Deserialize, Serialize};

/// Reusable order template created by the kitchen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: u64,
    /// Display name
    pub name: String,
    pub order_text: String,
    pub requirements: String,
}

/// Create preset payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetCreate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub order_text: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
}
