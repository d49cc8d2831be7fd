//! 出餐时间估算
//!
//! 从最近完成的订单推算建议备餐时间，仅作为厨房看板的参考值，不写回订单。

use shared::models::Order;
use shared::util::MINUTE_MILLIS;

/// 参与估算的最大样本数
pub const MAX_SAMPLES: usize = 10;

/// 给出估算所需的最少样本数
pub const MIN_SAMPLES: usize = 5;

/// Suggested preparation time in whole minutes
///
/// Walks `orders` from the most recent backwards and takes the duration from
/// `prep_started_at` to `ready_at` (or `delivered_at` when the order skipped
/// Ready). Each duration is rounded to whole minutes with a floor of 1.
/// Returns `None` with fewer than [`MIN_SAMPLES`] samples.
pub fn suggested_eta(orders: &[Order]) -> Option<u32> {
    let durations: Vec<u32> = orders
        .iter()
        .rev()
        .filter_map(|order| {
            let start = order.prep_started_at?;
            let end = order.ready_at.or(order.delivered_at)?;
            Some(round_minutes(end - start))
        })
        .take(MAX_SAMPLES)
        .collect();

    if durations.len() < MIN_SAMPLES {
        return None;
    }

    let total: u32 = durations.iter().sum();
    Some((total as f64 / durations.len() as f64).round() as u32)
}

fn round_minutes(millis: i64) -> u32 {
    let minutes = (millis as f64 / MINUTE_MILLIS as f64).round();
    minutes.max(1.0) as u32
}
