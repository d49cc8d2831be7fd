//! Employee API Handlers

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde_json::Value;
use shared::models::{
    LunchReady, LunchStatus, LunchToggle, MenuCategoryView, Order, OrderItem, Preset, RingCreate,
    RingEvent, SessionInfo, SessionRequest,
};
use shared::util::{non_blank, now_millis};
use shared::ErrorCode;

use crate::api::{LenientJson, OrderPath, session};
use crate::auth::{CurrentSession, SessionRole};
use crate::core::ServerState;
use crate::orders::NewOrder;
use crate::utils::time;
use crate::utils::{AppError, AppResult};

/// POST /session - 以员工姓名开启会话
pub async fn open_session(
    State(state): State<ServerState>,
    LenientJson(payload): LenientJson<SessionRequest>,
) -> AppResult<Json<SessionInfo>> {
    let name = non_blank(payload.employee_name.as_deref()).ok_or_else(|| {
        AppError::with_message(ErrorCode::RequiredField, "Please enter your name.")
            .with_detail("field", "employee_name")
    })?;
    let info = session::issue(&state.jwt_service, &name, SessionRole::Employee)?;
    Ok(Json(info))
}

pub async fn menu(State(state): State<ServerState>) -> Json<Vec<MenuCategoryView>> {
    Json(state.availability.list_with_availability())
}

pub async fn presets(State(state): State<ServerState>) -> Json<Vec<Preset>> {
    Json(state.orders.presets())
}

/// 解析 `order_items_json` 字段
///
/// 空字段视为没有明细；不是 JSON 数组时报校验错误。
/// 名称为空或数量不为正的明细丢弃
fn parse_order_items(raw: &str) -> AppResult<Vec<OrderItem>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) | Err(_) => {
            tracing::debug!(raw = %raw, "Rejected malformed order item list");
            return Err(AppError::validation("Invalid order item list")
                .with_detail("field", "order_items_json"));
        }
    };

    let items: Vec<OrderItem> = entries
        .iter()
        .filter_map(|entry| {
            let name = match entry.get("name")? {
                Value::String(s) => s.trim().to_string(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            let qty = match entry.get("qty")? {
                Value::Number(n) => n.as_i64()?,
                Value::String(s) => s.trim().parse().ok()?,
                _ => return None,
            };
            let qty = u32::try_from(qty).ok().filter(|q| *q > 0)?;
            (!name.is_empty()).then(|| OrderItem::new(name, qty))
        })
        .collect();

    if items.len() < entries.len() {
        tracing::debug!(
            dropped = entries.len() - items.len(),
            "Dropped order items without a name or positive quantity"
        );
    }
    Ok(items)
}

#[derive(Debug, Default)]
struct OrderForm {
    order_items: Vec<OrderItem>,
    order_text: Option<String>,
    requirements: Option<String>,
    mate_name: Option<String>,
    voice: Option<(Vec<u8>, Option<String>)>,
}

async fn read_order_form(mut multipart: Multipart) -> AppResult<OrderForm> {
    let mut form = OrderForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "voice" {
            let file_name = field.file_name().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?;
            form.voice = Some((data.to_vec(), file_name));
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?;
        match name.as_str() {
            "order_items_json" => form.order_items = parse_order_items(&text)?,
            "order_text" => form.order_text = non_blank(Some(text.as_str())),
            "requirements" => form.requirements = non_blank(Some(text.as_str())),
            "mate_name" => form.mate_name = non_blank(Some(text.as_str())),
            _ => {}
        }
    }

    Ok(form)
}

/// POST /orders - 下单
pub async fn create_order(
    State(state): State<ServerState>,
    session: CurrentSession,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Order>)> {
    let form = read_order_form(multipart).await?;

    let voice_ref = match &form.voice {
        Some((data, file_name)) => state.voice.save(data, file_name.as_deref()).await?,
        None => None,
    };

    let new_order = NewOrder {
        employee_name: session.name,
        mate_name: form.mate_name,
        order_text: form.order_text,
        order_items: form.order_items,
        requirements: form.requirements,
        voice_ref: voice_ref.clone(),
    };

    let created = state.orders.create(new_order, now_millis());
    state.release_expired_voice().await;
    match created {
        Ok(order) => Ok((StatusCode::CREATED, Json(order))),
        Err(e) => {
            if let Some(reference) = voice_ref {
                state.voice.release(&reference).await;
            }
            Err(e.into())
        }
    }
}

/// GET /orders - 自己或同伴的订单，新订单在前
pub async fn my_orders(
    State(state): State<ServerState>,
    session: CurrentSession,
) -> Json<Vec<Order>> {
    Json(state.orders.find_by_owner_or_mate(&session.name, now_millis()))
}

/// GET /orders/{id} - 状态轮询
pub async fn get_order(
    State(state): State<ServerState>,
    Path(path): Path<OrderPath>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.get(path.id, now_millis())?))
}

/// POST /orders/{id}/cancel
pub async fn cancel_order(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(path): Path<OrderPath>,
) -> AppResult<Json<Order>> {
    let cancellation = state.orders.cancel(path.id, &session.name, now_millis())?;
    if let Some(reference) = cancellation.released_voice {
        state.voice.release(&reference).await;
    }
    Ok(Json(cancellation.order))
}

/// POST /ring - 呼叫厨房
pub async fn ring(
    State(state): State<ServerState>,
    session: CurrentSession,
    LenientJson(payload): LenientJson<RingCreate>,
) -> AppResult<(StatusCode, Json<RingEvent>)> {
    let event = state
        .orders
        .raise_ring(&session.name, payload.message.as_deref(), now_millis())?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn lunch_ready(State(state): State<ServerState>) -> Json<LunchReady> {
    Json(state.lunch_ready.get())
}

/// GET /lunch - 今日签到状态
pub async fn lunch_status(
    State(state): State<ServerState>,
    session: CurrentSession,
) -> AppResult<Json<LunchStatus>> {
    let today = time::today(state.config.timezone);
    Ok(Json(state.lunch.status(&session.name, today).await?))
}

/// POST /lunch - 签到或取消签到
///
/// 未给出 `checked_in` 时翻转当前状态
pub async fn toggle_lunch(
    State(state): State<ServerState>,
    session: CurrentSession,
    LenientJson(payload): LenientJson<LunchToggle>,
) -> AppResult<Json<LunchStatus>> {
    let now = now_millis();
    let today = time::date_in_tz(now, state.config.timezone);

    let checked_in = match payload.checked_in {
        Some(value) => value,
        None => !state.lunch.is_checked_in(&session.name, today).await?,
    };
    if checked_in {
        state.lunch.check_in(&session.name, today, now).await?;
    } else {
        state.lunch.check_out(&session.name, today).await?;
    }

    Ok(Json(state.lunch.status(&session.name, today).await?))
}
