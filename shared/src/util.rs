/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 一小时的毫秒数
pub const HOUR_MILLIS: i64 = 60 * 60 * 1000;

/// 一分钟的毫秒数
pub const MINUTE_MILLIS: i64 = 60 * 1000;

/// Trim a free-text field, mapping blank input to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("  Priya ")), Some("Priya".to_string()));
    }
}
