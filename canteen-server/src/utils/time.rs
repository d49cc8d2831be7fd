//! 时间工具函数 (业务时区日期)
//!
//! 午餐签到按业务时区的自然日划分，日期在 API handler 层计算后传给 repository。

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult, ErrorCode};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::with_message(ErrorCode::InvalidDate, format!("Invalid date format: {}", date))
            .with_detail("date", date)
    })
}

/// 指定时刻在业务时区的日期
pub fn date_in_tz(millis: i64, tz: Tz) -> NaiveDate {
    chrono::DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .with_timezone(&tz)
        .date_naive()
}

/// 业务时区的今天
pub fn today(tz: Tz) -> NaiveDate {
    date_in_tz(shared::util::now_millis(), tz)
}
