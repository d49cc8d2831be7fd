use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::lunch::{LunchReadyFlag, LunchTracker};
use crate::menu::AvailabilityRegistry;
use crate::orders::OrderStore;
use crate::services::VoiceStorage;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一份成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | 午餐签到数据库 |
/// | orders | Arc<OrderStore> | 订单、预设与提醒日志 |
/// | availability | Arc<AvailabilityRegistry> | 菜品供应状态 |
/// | lunch | LunchTracker | 午餐签到 |
/// | lunch_ready | Arc<LunchReadyFlag> | 午餐已备好标记 |
/// | voice | VoiceStorage | 语音留言存储 |
/// | jwt_service | Arc<JwtService> | 会话令牌服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    pub orders: Arc<OrderStore>,
    pub availability: Arc<AvailabilityRegistry>,
    pub lunch: LunchTracker,
    pub lunch_ready: Arc<LunchReadyFlag>,
    pub voice: VoiceStorage,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 用已打开的连接池组装状态
    ///
    /// 测试中配合 [`DbService::in_memory`] 使用
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            voice: VoiceStorage::new(config.voice_dir()),
            lunch: LunchTracker::new(pool.clone()),
            config,
            pool,
            orders: Arc::new(OrderStore::new()),
            availability: Arc::new(AvailabilityRegistry::new()),
            lunch_ready: Arc::new(LunchReadyFlag::new()),
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (database/, uploads/voice/)
    /// 2. 数据库 (work_dir/database/canteen.db)
    /// 3. 内存服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("canteen.db");
        let db = DbService::new(&db_path.to_string_lossy())
            .await
            .map_err(ServerError::Database)?;
        tracing::info!(path = %db_path.display(), "Database ready");

        Ok(Self::new(config.clone(), db.pool))
    }

    /// 删除过期订单遗留的语音留言文件
    pub async fn release_expired_voice(&self) {
        for reference in self.orders.take_expired_voice() {
            self.voice.release(&reference).await;
        }
    }
}
