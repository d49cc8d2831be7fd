use shared::models::OrderStatus;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Order store errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    OrderNotFound(u64),

    #[error("{0}")]
    Validation(String),

    #[error("Please add at least one item.")]
    EmptyOrder,

    #[error("Invalid minutes")]
    InvalidMinutes,

    #[error("Minutes out of range: {0}")]
    MinutesOutOfRange(i64),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Order {id} is {status} and can no longer change")]
    NotMutable { id: u64, status: OrderStatus },

    #[error("Order {id} cannot move from {from} back to {to}")]
    StatusRegression {
        id: u64,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Order {id} is {status} and cannot be cancelled")]
    NotCancellable { id: u64, status: OrderStatus },

    #[error("Order {0} does not belong to the requester")]
    NotOwner(u64),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, "Order not found")
                    .with_detail("order_id", id)
            }
            StoreError::Validation(_) => AppError::validation(message),
            StoreError::EmptyOrder => AppError::new(ErrorCode::OrderEmpty),
            StoreError::InvalidMinutes => {
                AppError::validation(message).with_detail("field", "minutes")
            }
            StoreError::MinutesOutOfRange(value) => {
                AppError::with_message(ErrorCode::ValueOutOfRange, "Minutes out of range")
                    .with_detail("field", "minutes")
                    .with_detail("value", value)
            }
            StoreError::InvalidStatus(status) => {
                AppError::with_message(ErrorCode::InvalidStatus, "Invalid status")
                    .with_detail("status", status)
            }
            StoreError::NotMutable { id, status } => {
                AppError::with_message(ErrorCode::OrderNotMutable, message)
                    .with_detail("order_id", id)
                    .with_detail("status", status.as_str())
            }
            StoreError::StatusRegression { id, .. } => {
                AppError::with_message(ErrorCode::StatusRegression, message)
                    .with_detail("order_id", id)
            }
            StoreError::NotCancellable { id, status } => {
                AppError::with_message(ErrorCode::OrderNotCancellable, message)
                    .with_detail("order_id", id)
                    .with_detail("status", status.as_str())
            }
            StoreError::NotOwner(id) => {
                AppError::with_message(ErrorCode::NotOrderOwner, "Not allowed to cancel this order")
                    .with_detail("order_id", id)
            }
        }
    }
}
