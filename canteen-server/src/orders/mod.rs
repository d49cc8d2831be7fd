//! 订单模块
//!
//! - [`store`] - 内存订单簿与状态流转
//! - [`eta`] - 出餐时间估算
//! - [`presets`] - 预设订单模板

pub mod eta;
pub mod presets;
pub mod store;

pub use eta::suggested_eta;
pub use presets::PresetRegistry;
pub use store::{
    Cancellation, NewOrder, OrderStore, StatusChange, StoreError, StoreResult, parse_kitchen_status,
    parse_minutes,
};
