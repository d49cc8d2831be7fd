//! OrderStore - 内存订单簿
//!
//! 订单、预设与提醒日志共用一把 [`parking_lot::Mutex`]，每个操作都是一次
//! 完整的读-改-写。所有操作开始时先裁剪 12 小时前创建的订单。
//!
//! # 状态流转
//!
//! ```text
//! Pending ──► Preparing ──► Ready ──► Delivered
//!    │            │
//!    └────────────┴──► Cancelled (仅限下单人或同伴)
//! ```
//!
//! Delivered 与 Cancelled 之后不再接受任何修改。

mod error;

pub use error::*;

use parking_lot::Mutex;
use serde_json::Value;
use shared::models::{
    KitchenOrderView, Order, OrderItem, OrderStatus, Preset, PresetCreate, RingEvent,
};
use shared::util::{HOUR_MILLIS, non_blank};

use super::eta::suggested_eta;
use super::presets::PresetRegistry;
use crate::ring::RingLog;

/// 订单保留时长
pub const ORDER_RETENTION_MILLIS: i64 = 12 * HOUR_MILLIS;

/// 备餐时间上限 (分钟)
pub const MAX_PREP_MINUTES: i64 = 240;

/// Input for [`OrderStore::create`]
#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    pub employee_name: String,
    pub mate_name: Option<String>,
    pub order_text: Option<String>,
    pub order_items: Vec<OrderItem>,
    pub requirements: Option<String>,
    pub voice_ref: Option<String>,
}

/// Result of an employee cancellation
#[derive(Debug, Clone)]
pub struct Cancellation {
    pub order: Order,
    pub ring: RingEvent,
    /// Voice message detached from the cancelled order; the caller removes the file
    pub released_voice: Option<String>,
}

/// Result of a kitchen status change
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub order: Order,
    /// Voice message detached from a delivered order; the caller removes the file
    pub released_voice: Option<String>,
}

#[derive(Debug, Default)]
struct StoreInner {
    orders: Vec<Order>,
    next_order_id: u64,
    presets: PresetRegistry,
    rings: RingLog,
    /// 裁剪时从过期订单上摘下的语音留言，等待调用方删除文件
    expired_voice: Vec<String>,
}

impl StoreInner {
    fn prune(&mut self, now: i64) -> usize {
        let cutoff = now - ORDER_RETENTION_MILLIS;
        let before = self.orders.len();
        let mut expired_voice = Vec::new();
        self.orders.retain_mut(|o| {
            if o.created_at >= cutoff {
                return true;
            }
            expired_voice.extend(o.voice_ref.take());
            false
        });
        self.expired_voice.append(&mut expired_voice);
        let removed = before - self.orders.len();
        if removed > 0 {
            tracing::debug!(removed, "Pruned expired orders");
        }
        removed + self.rings.prune(now)
    }

    fn order_mut(&mut self, id: u64) -> StoreResult<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::OrderNotFound(id))
    }
}

/// In-memory order book
#[derive(Debug, Default)]
pub struct OrderStore {
    inner: Mutex<StoreInner>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建订单
    ///
    /// 数量为 0 或名称为空的明细先被丢弃；明细、文字与语音都为空时拒绝。
    /// 文字为空时由明细拼出，例如 `Tea x2, Coffee x1`。
    pub fn create(&self, new: NewOrder, now: i64) -> StoreResult<Order> {
        let employee_name = new.employee_name.trim().to_string();
        if employee_name.is_empty() {
            return Err(StoreError::Validation("Employee name is required".to_string()));
        }

        let order_items: Vec<OrderItem> = new
            .order_items
            .into_iter()
            .filter_map(|item| {
                let name = item.name.trim();
                (!name.is_empty() && item.qty > 0).then(|| OrderItem::new(name, item.qty))
            })
            .collect();
        let voice_ref = non_blank(new.voice_ref.as_deref());

        let order_text = match non_blank(new.order_text.as_deref()) {
            Some(text) => text,
            None if !order_items.is_empty() => order_items
                .iter()
                .map(|item| format!("{} x{}", item.name, item.qty))
                .collect::<Vec<_>>()
                .join(", "),
            None if voice_ref.is_some() => String::new(),
            None => return Err(StoreError::EmptyOrder),
        };

        let mut inner = self.inner.lock();
        inner.prune(now);
        inner.next_order_id += 1;

        let order = Order {
            id: inner.next_order_id,
            employee_name,
            mate_name: non_blank(new.mate_name.as_deref()),
            order_text,
            order_items,
            requirements: non_blank(new.requirements.as_deref()).unwrap_or_default(),
            voice_ref,
            created_at: now,
            status: OrderStatus::Pending,
            prep_minutes: None,
            prep_started_at: None,
            ready_at: None,
            delivered_at: None,
            cancelled_at: None,
        };
        inner.orders.push(order.clone());

        tracing::info!(
            order_id = order.id,
            employee = %order.employee_name,
            "Order created"
        );
        Ok(order)
    }

    /// 裁剪过期订单与提醒，返回删除数量
    ///
    /// 过期订单的语音留言通过 [`Self::take_expired_voice`] 取出。
    pub fn prune(&self, now: i64) -> usize {
        self.inner.lock().prune(now)
    }

    /// 取出裁剪时摘下的语音留言引用，由调用方在锁外删除文件
    pub fn take_expired_voice(&self) -> Vec<String> {
        std::mem::take(&mut self.inner.lock().expired_voice)
    }

    pub fn get(&self, id: u64, now: i64) -> StoreResult<Order> {
        let mut inner = self.inner.lock();
        inner.prune(now);
        inner.order_mut(id).map(|o| o.clone())
    }

    /// 厨房修改状态
    ///
    /// 状态只能前进；设置为当前状态时不做修改。进入 Delivered 时解除语音留言，
    /// 由调用方在锁外删除文件。
    pub fn set_status(&self, id: u64, status: OrderStatus, now: i64) -> StoreResult<StatusChange> {
        let Some(target_rank) = status.rank() else {
            return Err(StoreError::InvalidStatus(status.as_str().to_string()));
        };

        let mut inner = self.inner.lock();
        inner.prune(now);
        let order = inner.order_mut(id)?;

        if order.status.is_terminal() {
            return Err(StoreError::NotMutable {
                id,
                status: order.status,
            });
        }
        if order.status == status {
            return Ok(StatusChange {
                order: order.clone(),
                released_voice: None,
            });
        }
        if order.status.rank().is_some_and(|current| target_rank < current) {
            return Err(StoreError::StatusRegression {
                id,
                from: order.status,
                to: status,
            });
        }

        let from = order.status;
        order.status = status;
        let mut released_voice = None;
        match status {
            OrderStatus::Preparing => {
                order.prep_started_at.get_or_insert(now);
            }
            OrderStatus::Ready => order.ready_at = Some(now),
            OrderStatus::Delivered => {
                order.delivered_at = Some(now);
                released_voice = order.voice_ref.take();
            }
            OrderStatus::Pending | OrderStatus::Cancelled => {}
        }

        tracing::info!(order_id = id, from = %from, status = %status, "Order status changed");
        Ok(StatusChange {
            order: order.clone(),
            released_voice,
        })
    }

    /// 员工取消订单
    ///
    /// 取消与对应的提醒事件在同一临界区内完成；语音留言随之解除。
    pub fn cancel(&self, id: u64, requester: &str, now: i64) -> StoreResult<Cancellation> {
        let mut inner = self.inner.lock();
        inner.prune(now);
        let order = inner.order_mut(id)?;

        if !order.is_owned_by(requester) {
            return Err(StoreError::NotOwner(id));
        }
        if !order.status.is_cancellable() {
            return Err(StoreError::NotCancellable {
                id,
                status: order.status,
            });
        }

        order.status = OrderStatus::Cancelled;
        order.cancelled_at = Some(now);
        let released_voice = order.voice_ref.take();
        let order = order.clone();

        let message = format!("Order #{} cancelled", id);
        let ring = inner.rings.push(requester, Some(&message), now);

        tracing::info!(order_id = id, employee = %requester.trim(), "Order cancelled");
        Ok(Cancellation {
            order,
            ring,
            released_voice,
        })
    }

    /// 厨房设置备餐时间，订单进入 Preparing
    pub fn set_prep_minutes(&self, id: u64, minutes: i64, now: i64) -> StoreResult<Order> {
        if minutes <= 0 || minutes > MAX_PREP_MINUTES {
            return Err(StoreError::MinutesOutOfRange(minutes));
        }

        let mut inner = self.inner.lock();
        inner.prune(now);
        let order = inner.order_mut(id)?;

        if matches!(
            order.status,
            OrderStatus::Cancelled | OrderStatus::Ready | OrderStatus::Delivered
        ) {
            return Err(StoreError::NotMutable {
                id,
                status: order.status,
            });
        }

        order.prep_minutes = Some(minutes as u32);
        order.prep_started_at = Some(now);
        order.status = OrderStatus::Preparing;

        tracing::info!(order_id = id, minutes, "Preparation time set");
        Ok(order.clone())
    }

    /// Orders created within the trailing window, newest first
    pub fn list_recent(&self, window_hours: i64, now: i64) -> Vec<Order> {
        let mut inner = self.inner.lock();
        inner.prune(now);
        let cutoff = now - window_hours * HOUR_MILLIS;
        inner
            .orders
            .iter()
            .rev()
            .filter(|o| o.created_at >= cutoff)
            .cloned()
            .collect()
    }

    /// Kitchen dashboard: recent orders annotated with the current ETA
    ///
    /// The estimate draws on every retained order, not only the window.
    pub fn kitchen_view(&self, window_hours: i64, now: i64) -> Vec<KitchenOrderView> {
        let mut inner = self.inner.lock();
        inner.prune(now);
        let eta = suggested_eta(&inner.orders);
        let cutoff = now - window_hours * HOUR_MILLIS;
        inner
            .orders
            .iter()
            .rev()
            .filter(|o| o.created_at >= cutoff)
            .map(|order| KitchenOrderView {
                order: order.clone(),
                suggested_eta: eta,
            })
            .collect()
    }

    /// Orders placed by or for `name`, newest first
    pub fn find_by_owner_or_mate(&self, name: &str, now: i64) -> Vec<Order> {
        let mut inner = self.inner.lock();
        inner.prune(now);
        inner
            .orders
            .iter()
            .rev()
            .filter(|o| o.is_owned_by(name))
            .cloned()
            .collect()
    }

    pub fn suggested_eta(&self, now: i64) -> Option<u32> {
        let mut inner = self.inner.lock();
        inner.prune(now);
        suggested_eta(&inner.orders)
    }

    // ========== Presets ==========

    pub fn add_preset(&self, payload: PresetCreate) -> StoreResult<Preset> {
        let preset = self.inner.lock().presets.add(payload)?;
        tracing::info!(preset_id = preset.id, name = %preset.name, "Preset added");
        Ok(preset)
    }

    pub fn presets(&self) -> Vec<Preset> {
        self.inner.lock().presets.list()
    }

    // ========== Ring log ==========

    /// 员工呼叫厨房
    pub fn raise_ring(
        &self,
        employee_name: &str,
        message: Option<&str>,
        now: i64,
    ) -> StoreResult<RingEvent> {
        if employee_name.trim().is_empty() {
            return Err(StoreError::Validation("Employee name is required".to_string()));
        }
        let mut inner = self.inner.lock();
        inner.prune(now);
        let event = inner.rings.push(employee_name, message, now);
        tracing::info!(ring_id = event.id, employee = %event.employee_name, "Ring raised");
        Ok(event)
    }

    /// Newest `limit` ring events, newest first
    pub fn recent_rings(&self, limit: usize, now: i64) -> Vec<RingEvent> {
        let mut inner = self.inner.lock();
        inner.prune(now);
        inner.rings.recent(limit)
    }
}

/// 解析厨房提交的状态字符串
///
/// Cancelled 只能由下单人通过取消接口设置。
pub fn parse_kitchen_status(raw: Option<&str>) -> StoreResult<OrderStatus> {
    let raw = raw.unwrap_or_default().trim();
    match raw.parse::<OrderStatus>() {
        Ok(OrderStatus::Cancelled) | Err(_) => Err(StoreError::InvalidStatus(raw.to_string())),
        Ok(status) => Ok(status),
    }
}

/// 解析备餐分钟数，接受数字或数字字符串
///
/// 小数按整数截断。
pub fn parse_minutes(value: Option<&Value>) -> StoreResult<i64> {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or(StoreError::InvalidMinutes),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| StoreError::InvalidMinutes),
        _ => Err(StoreError::InvalidMinutes),
    }
}
