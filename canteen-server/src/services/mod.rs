//! 服务层 - 服务器核心服务
//!
//! # 服务列表
//!
//! - [`https`] - 路由组装与 HTTP 中间件
//! - [`VoiceStorage`] - 语音留言文件存储

pub mod https;
pub mod voice;

pub use https::{build_app, build_router};
pub use voice::{VoiceError, VoiceStorage};
