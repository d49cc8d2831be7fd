//! Order Model (员工点单)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle status
///
/// Pending → Preparing → Ready → Delivered, with Cancelled reachable from
/// Pending or Preparing. Serialized with the capitalized names the front end
/// displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Position on the forward path; `None` for Cancelled
    pub fn rank(&self) -> Option<u8> {
        match self {
            Self::Pending => Some(0),
            Self::Preparing => Some(1),
            Self::Ready => Some(2),
            Self::Delivered => Some(3),
            Self::Cancelled => None,
        }
    }

    /// Cancelled and Delivered orders accept no further mutation
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Delivered)
    }

    /// Only orders the kitchen has not finished can be cancelled
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Preparing)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Pending" => Ok(Self::Pending),
            "Preparing" => Ok(Self::Preparing),
            "Ready" => Ok(Self::Ready),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// One structured line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub qty: u32,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, qty: u32) -> Self {
        Self {
            name: name.into(),
            qty,
        }
    }
}

/// Order record
///
/// All timestamps are Unix millis (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub employee_name: String,
    /// Colleague allowed to track and cancel the order
    pub mate_name: Option<String>,
    pub order_text: String,
    pub order_items: Vec<OrderItem>,
    pub requirements: String,
    /// Stored voice message file reference
    pub voice_ref: Option<String>,
    pub created_at: i64,
    pub status: OrderStatus,
    pub prep_minutes: Option<u32>,
    pub prep_started_at: Option<i64>,
    pub ready_at: Option<i64>,
    pub delivered_at: Option<i64>,
    pub cancelled_at: Option<i64>,
}

impl Order {
    /// Case-insensitive match on the employee or mate name
    pub fn is_owned_by(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return false;
        }
        let matches = |candidate: &str| candidate.trim().to_lowercase() == name;
        matches(&self.employee_name) || self.mate_name.as_deref().is_some_and(matches)
    }
}

/// Order as shown on the kitchen dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenOrderView {
    #[serde(flatten)]
    pub order: Order,
    /// Advisory preparation estimate (minutes) from recent history
    pub suggested_eta: Option<u32>,
}

/// Kitchen status update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: Option<String>,
}

/// Kitchen preparation-time payload
///
/// `minutes` accepts a number or a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepUpdate {
    #[serde(default)]
    pub minutes: Option<serde_json::Value>,
}
