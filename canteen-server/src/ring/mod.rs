//! Ring Log - 员工呼叫厨房的提醒事件
//!
//! 只追加，按创建时间裁剪。由 [`crate::orders::OrderStore`] 在同一把锁下持有，
//! 取消订单与其提醒事件在同一临界区内完成。

use shared::models::RingEvent;
use shared::util::{HOUR_MILLIS, non_blank};

/// 提醒事件保留时长
pub const RING_RETENTION_MILLIS: i64 = 12 * HOUR_MILLIS;

/// 默认返回条数
pub const DEFAULT_RING_LIMIT: usize = 20;

#[derive(Debug, Default)]
pub struct RingLog {
    events: Vec<RingEvent>,
    next_id: u64,
}

impl RingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. The caller validates the employee name.
    pub fn push(&mut self, employee_name: &str, message: Option<&str>, now: i64) -> RingEvent {
        self.next_id += 1;
        let event = RingEvent {
            id: self.next_id,
            employee_name: employee_name.trim().to_string(),
            created_at: now,
            message: non_blank(message),
        };
        self.events.push(event.clone());
        event
    }

    /// 删除超过保留时长的事件，返回删除数量
    pub fn prune(&mut self, now: i64) -> usize {
        let before = self.events.len();
        let cutoff = now - RING_RETENTION_MILLIS;
        self.events.retain(|e| e.created_at >= cutoff);
        before - self.events.len()
    }

    /// Newest `limit` events, newest first
    pub fn recent(&self, limit: usize) -> Vec<RingEvent> {
        self.events.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_ids_and_normalizes_message() {
        let mut log = RingLog::new();
        let first = log.push("Priya", Some("  "), 1_000);
        let second = log.push(" Arjun ", Some(" more chai "), 2_000);

        assert_eq!(first.id, 1);
        assert_eq!(first.message, None);
        assert_eq!(second.id, 2);
        assert_eq!(second.employee_name, "Arjun");
        assert_eq!(second.message.as_deref(), Some("more chai"));
    }

    #[test]
    fn test_recent_is_newest_first_and_limited() {
        let mut log = RingLog::new();
        for i in 0..5 {
            log.push("Priya", None, i * 1_000);
        }
        let recent = log.recent(3);
        assert_eq!(
            recent.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![5, 4, 3]
        );
    }

    #[test]
    fn test_prune_drops_events_older_than_twelve_hours() {
        let mut log = RingLog::new();
        log.push("Priya", None, 0);
        log.push("Arjun", None, 2 * HOUR_MILLIS);

        let now = 13 * HOUR_MILLIS;
        assert_eq!(log.prune(now), 1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.recent(10)[0].employee_name, "Arjun");
        // idempotent
        assert_eq!(log.prune(now), 0);
    }
}
