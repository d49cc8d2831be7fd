//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employee`] - 员工接口 (`/api/employee/{link}`)
//! - [`kitchen`] - 厨房接口 (`/api/kitchen/{link}`)
//! - [`extract`] - 宽松 JSON 提取器
//!
//! 成功时直接返回资源本身，错误统一使用 `ApiResponse` 信封。

pub mod employee;
pub mod extract;
pub mod health;
pub mod kitchen;
pub mod session;

pub use extract::LenientJson;

use serde::Deserialize;

/// `{id}` path segment for order routes
///
/// 嵌套路由同时捕获 `{link}`，结构体只取需要的字段
#[derive(Debug, Deserialize)]
pub struct OrderPath {
    pub id: u64,
}
