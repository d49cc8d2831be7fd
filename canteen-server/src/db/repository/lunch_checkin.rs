//! Lunch Check-in Repository
//!
//! Dates are stored as `YYYY-MM-DD` text so lexical order equals calendar
//! order. Each function acquires one pooled connection; the guard returns it
//! to the pool on every exit path.

use super::{RepoError, RepoResult};
use chrono::{Datelike, NaiveDate};
use sqlx::SqlitePool;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// 历史至少覆盖的天数，不足时不做预测
pub const PREDICTION_MIN_HISTORY_DAYS: i64 = 14;

fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date_key(raw: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| RepoError::Database(format!("Corrupt checkin_date '{raw}': {e}")))
}

/// Upsert a check-in; the latest call wins
pub async fn check_in(
    pool: &SqlitePool,
    employee_name: &str,
    date: NaiveDate,
    now: i64,
) -> RepoResult<()> {
    let mut conn = pool.acquire().await?;
    sqlx::query(
        "INSERT INTO lunch_checkin (employee_name, checkin_date, checked_in_at) VALUES (?1, ?2, ?3) \
         ON CONFLICT(employee_name, checkin_date) DO UPDATE SET checked_in_at = excluded.checked_in_at",
    )
    .bind(employee_name)
    .bind(date_key(date))
    .bind(now)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Remove a check-in; returns whether a row existed
pub async fn check_out(pool: &SqlitePool, employee_name: &str, date: NaiveDate) -> RepoResult<bool> {
    let mut conn = pool.acquire().await?;
    let result = sqlx::query("DELETE FROM lunch_checkin WHERE employee_name = ?1 AND checkin_date = ?2")
        .bind(employee_name)
        .bind(date_key(date))
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn is_checked_in(
    pool: &SqlitePool,
    employee_name: &str,
    date: NaiveDate,
) -> RepoResult<bool> {
    let mut conn = pool.acquire().await?;
    let found: Option<i64> = sqlx::query_scalar(
        "SELECT 1 FROM lunch_checkin WHERE employee_name = ?1 AND checkin_date = ?2",
    )
    .bind(employee_name)
    .bind(date_key(date))
    .fetch_optional(&mut *conn)
    .await?;
    Ok(found.is_some())
}

/// Names checked in on `date`, sorted
pub async fn names_for_date(pool: &SqlitePool, date: NaiveDate) -> RepoResult<Vec<String>> {
    let mut conn = pool.acquire().await?;
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT employee_name FROM lunch_checkin WHERE checkin_date = ?1 ORDER BY employee_name",
    )
    .bind(date_key(date))
    .fetch_all(&mut *conn)
    .await?;
    Ok(names)
}

/// Expected head count for `date` from same-weekday history
///
/// `None` until the earliest recorded day is at least
/// [`PREDICTION_MIN_HISTORY_DAYS`] before `date`, or when no earlier day
/// shares the weekday.
pub async fn predict(pool: &SqlitePool, date: NaiveDate) -> RepoResult<Option<u32>> {
    let mut conn = pool.acquire().await?;

    let earliest: Option<String> = sqlx::query_scalar("SELECT MIN(checkin_date) FROM lunch_checkin")
        .fetch_one(&mut *conn)
        .await?;
    let Some(earliest) = earliest else {
        return Ok(None);
    };
    if (date - parse_date_key(&earliest)?).num_days() < PREDICTION_MIN_HISTORY_DAYS {
        return Ok(None);
    }

    let rows: Vec<(String, i64)> = sqlx::query_as(
        "SELECT checkin_date, COUNT(*) FROM lunch_checkin WHERE checkin_date < ?1 GROUP BY checkin_date",
    )
    .bind(date_key(date))
    .fetch_all(&mut *conn)
    .await?;

    let mut counts = Vec::new();
    for (day, count) in rows {
        if parse_date_key(&day)?.weekday() == date.weekday() {
            counts.push(count);
        }
    }
    if counts.is_empty() {
        return Ok(None);
    }

    let mean = counts.iter().sum::<i64>() as f64 / counts.len() as f64;
    Ok(Some(mean.round() as u32))
}
