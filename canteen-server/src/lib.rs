//! Canteen Server - 办公室食堂点单服务
//!
//! # 架构概述
//!
//! 员工通过员工链接下单、跟踪、取消订单并签到午餐；厨房通过厨房链接查看看板、
//! 推进订单状态、维护菜品供应与预设订单。
//!
//! - **订单** (`orders`): 内存订单簿、状态流转、出餐时间估算
//! - **午餐** (`lunch`): SQLite 签到表与人数预测
//! - **认证** (`auth`): 访问链接 + JWT 会话令牌
//! - **HTTP API** (`api`): JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! canteen-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # 访问链接、JWT 会话
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 订单簿、ETA、预设
//! ├── ring/          # 呼叫厨房日志
//! ├── menu/          # 菜单与供应状态
//! ├── lunch/         # 午餐签到
//! ├── services/      # 路由组装、语音留言存储
//! ├── db/            # SQLite 连接池与 repository
//! └── utils/         # 日志、时间工具
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod lunch;
pub mod menu;
pub mod orders;
pub mod ring;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentSession, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::OrderStore;
pub use services::build_router;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 加载 `.env` 并初始化日志 (LOG_LEVEL, LOG_DIR)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______            __
  / ____/___ _____  / /____  ___  ____
 / /   / __ `/ __ \/ __/ _ \/ _ \/ __ \
/ /___/ /_/ / / / / /_/  __/  __/ / / /
\____/\__,_/_/ /_/\__/\___/\___/_/ /_/
    "#
    );
}
