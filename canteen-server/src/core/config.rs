use std::path::PathBuf;

use chrono_tz::Tz;

use crate::auth::JwtConfig;

/// 服务器配置 - 食堂点单服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、语音留言) |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | EMPLOYEE_TOKEN | employee-access | 员工访问链接密钥 |
/// | CHEF_TOKEN | chef-access | 厨房访问链接密钥 |
/// | MENU_ASSETS_DIR | static/menu | 菜单图片目录 |
/// | TIMEZONE | Asia/Kolkata | 业务时区 (午餐签到按此划分日期) |
/// | KITCHEN_WINDOW_HOURS | 1 | 厨房看板显示最近几小时的订单 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/canteen HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和语音留言
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 员工访问链接密钥
    pub employee_link: String,
    /// 厨房访问链接密钥
    pub kitchen_link: String,
    /// 菜单图片目录
    pub menu_assets_dir: String,
    /// 业务时区
    pub timezone: Tz,
    /// 厨房看板时间窗口 (小时)
    pub kitchen_window_hours: i64,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// JWT 会话配置
    pub jwt: JwtConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            employee_link: std::env::var("EMPLOYEE_TOKEN")
                .unwrap_or_else(|_| "employee-access".into()),
            kitchen_link: std::env::var("CHEF_TOKEN").unwrap_or_else(|_| "chef-access".into()),
            menu_assets_dir: std::env::var("MENU_ASSETS_DIR")
                .unwrap_or_else(|_| "static/menu".into()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| {
                    tz.parse().ok().or_else(|| {
                        tracing::warn!("Unknown TIMEZONE '{}', falling back to Asia/Kolkata", tz);
                        None
                    })
                })
                .unwrap_or(chrono_tz::Asia::Kolkata),
            kitchen_window_hours: std::env::var("KITCHEN_WINDOW_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|h: &i64| *h > 0)
                .unwrap_or(1),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            jwt: JwtConfig::default(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 语音留言目录 (work_dir/uploads/voice)
    pub fn voice_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads").join("voice")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.voice_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
