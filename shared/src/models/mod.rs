//! Data models
//!
//! Shared between canteen-server and the browser front end (via API).
//! Timestamps are `i64` Unix millis; calendar dates are `NaiveDate`.

pub mod lunch;
pub mod menu;
pub mod order;
pub mod preset;
pub mod ring;
pub mod session;

// Re-exports
pub use lunch::*;
pub use menu::*;
pub use order::*;
pub use preset::*;
pub use ring::*;
pub use session::*;
