//! Unified error codes for the canteen service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Menu and file errors
//! - 7xxx: Lunch errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the browser front end
/// can switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// No session token presented
    NotAuthenticated = 1001,
    /// Session token has expired
    TokenExpired = 1003,
    /// Session token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Session role does not match the endpoint
    RoleRequired = 2002,
    /// Requester is neither the owner nor the mate of the order
    NotOrderOwner = 2010,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Unknown order status value
    InvalidStatus = 4002,
    /// Order is cancelled or delivered and can no longer change
    OrderNotMutable = 4003,
    /// Order can no longer be cancelled
    OrderNotCancellable = 4004,
    /// Status change would move the order backwards
    StatusRegression = 4005,
    /// Order has no items, text or voice message
    OrderEmpty = 4007,

    // ==================== 6xxx: Menu / Files ====================
    /// Menu item name missing
    MenuItemNameRequired = 6001,
    /// Voice message file too large
    FileTooLarge = 6501,
    /// Unsupported voice message format
    UnsupportedFileFormat = 6502,
    /// Invalid file extension
    InvalidFileExtension = 6507,
    /// File storage failed
    FileStorageFailed = 6509,
    /// Voice message not found
    VoiceMessageNotFound = 6510,

    // ==================== 7xxx: Lunch ====================
    /// Invalid calendar date
    InvalidDate = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Please open a session first",
            ErrorCode::TokenExpired => "Session token has expired",
            ErrorCode::TokenInvalid => "Session token is invalid",

            // Permission
            ErrorCode::RoleRequired => "This endpoint requires a different role",
            ErrorCode::NotOrderOwner => "Only the person who placed the order or their mate can do this",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidStatus => "Invalid status",
            ErrorCode::OrderNotMutable => "Order can no longer be changed",
            ErrorCode::OrderNotCancellable => "Order can no longer be cancelled",
            ErrorCode::StatusRegression => "Order status cannot move backwards",
            ErrorCode::OrderEmpty => "Please add at least one item.",

            // Menu / Files
            ErrorCode::MenuItemNameRequired => "Item name is required",
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::InvalidFileExtension => "Invalid file extension",
            ErrorCode::FileStorageFailed => "File storage failed",
            ErrorCode::VoiceMessageNotFound => "Voice message not found",

            // Lunch
            ErrorCode::InvalidDate => "Invalid date",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2002 => Ok(ErrorCode::RoleRequired),
            2010 => Ok(ErrorCode::NotOrderOwner),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidStatus),
            4003 => Ok(ErrorCode::OrderNotMutable),
            4004 => Ok(ErrorCode::OrderNotCancellable),
            4005 => Ok(ErrorCode::StatusRegression),
            4007 => Ok(ErrorCode::OrderEmpty),

            // Menu / Files
            6001 => Ok(ErrorCode::MenuItemNameRequired),
            6501 => Ok(ErrorCode::FileTooLarge),
            6502 => Ok(ErrorCode::UnsupportedFileFormat),
            6507 => Ok(ErrorCode::InvalidFileExtension),
            6509 => Ok(ErrorCode::FileStorageFailed),
            6510 => Ok(ErrorCode::VoiceMessageNotFound),

            // Lunch
            7001 => Ok(ErrorCode::InvalidDate),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
