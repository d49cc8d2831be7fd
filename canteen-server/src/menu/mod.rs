//! 菜单与供应状态
//!
//! 菜单固定在 [`catalog::MENU`]，厨房只能切换单品是否供应。

pub mod availability;
pub mod catalog;

pub use availability::{AvailabilityRegistry, MenuError};
