use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动与运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("工作目录错误: {0}")]
    WorkDir(#[from] std::io::Error),

    #[error("数据库错误: {0}")]
    Database(AppError),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
