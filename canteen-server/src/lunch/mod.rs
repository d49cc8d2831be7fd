//! 午餐签到
//!
//! - [`LunchTracker`] - 签到、取消签到、当日名单与人数预测 (SQLite)
//! - [`LunchReadyFlag`] - 厨房宣布午餐已备好的全局标记 (内存)

mod ready;

pub use ready::LunchReadyFlag;

use chrono::NaiveDate;
use shared::models::{LunchStatus, LunchSummary};
use shared::{AppError, ErrorCode};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::repository::{RepoError, lunch_checkin};

#[derive(Debug, Error)]
pub enum LunchError {
    #[error("Employee name is required")]
    EmptyName,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<LunchError> for AppError {
    fn from(err: LunchError) -> Self {
        match err {
            LunchError::EmptyName => {
                AppError::with_message(ErrorCode::RequiredField, err.to_string())
                    .with_detail("field", "employee_name")
            }
            LunchError::Repo(RepoError::Database(msg)) => AppError::database(msg),
        }
    }
}

pub type LunchResult<T> = Result<T, LunchError>;

fn employee_key(name: &str) -> LunchResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LunchError::EmptyName);
    }
    Ok(name)
}

/// Lunch attendance backed by the `lunch_checkin` table
#[derive(Debug, Clone)]
pub struct LunchTracker {
    pool: SqlitePool,
}

impl LunchTracker {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn check_in(&self, employee_name: &str, date: NaiveDate, now: i64) -> LunchResult<()> {
        let name = employee_key(employee_name)?;
        lunch_checkin::check_in(&self.pool, name, date, now).await?;
        tracing::info!(employee = %name, %date, "Lunch check-in");
        Ok(())
    }

    /// 取消签到，未签到时不报错
    pub async fn check_out(&self, employee_name: &str, date: NaiveDate) -> LunchResult<()> {
        let name = employee_key(employee_name)?;
        let removed = lunch_checkin::check_out(&self.pool, name, date).await?;
        tracing::info!(employee = %name, %date, removed, "Lunch check-out");
        Ok(())
    }

    pub async fn is_checked_in(&self, employee_name: &str, date: NaiveDate) -> LunchResult<bool> {
        let name = employee_key(employee_name)?;
        Ok(lunch_checkin::is_checked_in(&self.pool, name, date).await?)
    }

    /// Sorted names checked in on `date` and their count
    pub async fn count_for_date(&self, date: NaiveDate) -> LunchResult<(Vec<String>, usize)> {
        let names = lunch_checkin::names_for_date(&self.pool, date).await?;
        let count = names.len();
        Ok((names, count))
    }

    pub async fn predict(&self, date: NaiveDate) -> LunchResult<Option<u32>> {
        Ok(lunch_checkin::predict(&self.pool, date).await?)
    }

    /// 员工视角：自己是否已签到及当日人数
    pub async fn status(&self, employee_name: &str, date: NaiveDate) -> LunchResult<LunchStatus> {
        let checked_in = self.is_checked_in(employee_name, date).await?;
        let (_, count) = self.count_for_date(date).await?;
        Ok(LunchStatus {
            date,
            checked_in,
            count,
        })
    }

    /// 厨房视角：当日名单、人数与预测
    pub async fn summary(&self, date: NaiveDate) -> LunchResult<LunchSummary> {
        let (names, count) = self.count_for_date(date).await?;
        let predicted = self.predict(date).await?;
        Ok(LunchSummary {
            date,
            names,
            count,
            predicted,
        })
    }
}
