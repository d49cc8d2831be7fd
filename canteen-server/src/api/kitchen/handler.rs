//! Kitchen API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use shared::models::{
    AvailabilityUpdate, KitchenOrderView, LunchReady, LunchReadyUpdate, LunchSummary,
    MenuCategoryView, Order, PrepUpdate, Preset, PresetCreate, RingEvent, SessionInfo,
    StatusUpdate,
};
use shared::util::now_millis;

use crate::api::session::{self, KITCHEN_SUBJECT};
use crate::api::{LenientJson, OrderPath};
use crate::auth::SessionRole;
use crate::core::ServerState;
use crate::orders::{parse_kitchen_status, parse_minutes};
use crate::ring::DEFAULT_RING_LIMIT;
use crate::services::voice::VoiceError;
use crate::utils::{AppResult, time};

/// 单次最多返回的呼叫条数
const MAX_RING_LIMIT: usize = 200;

/// POST /session - 开启厨房会话
pub async fn open_session(State(state): State<ServerState>) -> AppResult<Json<SessionInfo>> {
    let info = session::issue(&state.jwt_service, KITCHEN_SUBJECT, SessionRole::Kitchen)?;
    Ok(Json(info))
}

/// GET /orders - 看板订单，新订单在前
///
/// 看板定时轮询，顺带删除过期订单的语音留言
pub async fn list_orders(State(state): State<ServerState>) -> Json<Vec<KitchenOrderView>> {
    let orders = state
        .orders
        .kitchen_view(state.config.kitchen_window_hours, now_millis());
    state.release_expired_voice().await;
    Json(orders)
}

/// POST /orders/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(path): Path<OrderPath>,
    LenientJson(payload): LenientJson<StatusUpdate>,
) -> AppResult<Json<Order>> {
    let status = parse_kitchen_status(payload.status.as_deref())?;
    let change = state.orders.set_status(path.id, status, now_millis())?;

    if let Some(reference) = change.released_voice {
        state.voice.release(&reference).await;
    }
    Ok(Json(change.order))
}

/// POST /orders/{id}/prep
pub async fn update_prep(
    State(state): State<ServerState>,
    Path(path): Path<OrderPath>,
    LenientJson(payload): LenientJson<PrepUpdate>,
) -> AppResult<Json<Order>> {
    let minutes = parse_minutes(payload.minutes.as_ref())?;
    let order = state.orders.set_prep_minutes(path.id, minutes, now_millis())?;
    Ok(Json(order))
}

/// GET /orders/{id}/voice - 语音留言
pub async fn voice(
    State(state): State<ServerState>,
    Path(path): Path<OrderPath>,
) -> AppResult<impl IntoResponse> {
    let order = state.orders.get(path.id, now_millis())?;
    let reference = order.voice_ref.ok_or(VoiceError::NotFound)?;
    let file = state.voice.open(&reference).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, file.content_type)],
        file.data,
    ))
}

pub async fn lunch_ready(State(state): State<ServerState>) -> Json<LunchReady> {
    Json(state.lunch_ready.get())
}

/// POST /lunch-ready - 缺省视为 false
pub async fn set_lunch_ready(
    State(state): State<ServerState>,
    LenientJson(payload): LenientJson<LunchReadyUpdate>,
) -> Json<LunchReady> {
    let ready = payload.ready.unwrap_or(false);
    Json(state.lunch_ready.set(ready, now_millis()))
}

pub async fn menu(State(state): State<ServerState>) -> Json<Vec<MenuCategoryView>> {
    Json(state.availability.list_with_availability())
}

/// POST /menu/availability - 缺省 `available` 视为 false
pub async fn set_availability(
    State(state): State<ServerState>,
    LenientJson(payload): LenientJson<AvailabilityUpdate>,
) -> AppResult<Json<AvailabilityUpdate>> {
    let item_name = payload.item_name.unwrap_or_default();
    let available = payload.available.unwrap_or(false);
    state.availability.set(&item_name, available)?;

    Ok(Json(AvailabilityUpdate {
        item_name: Some(item_name.trim().to_string()),
        available: Some(available),
    }))
}

#[derive(Debug, Deserialize)]
pub struct LunchQuery {
    pub date: Option<String>,
}

/// GET /lunch?date=YYYY-MM-DD - 缺省为业务时区的今天
pub async fn lunch_summary(
    State(state): State<ServerState>,
    Query(query): Query<LunchQuery>,
) -> AppResult<Json<LunchSummary>> {
    let date = match query.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => time::parse_date(raw)?,
        None => time::today(state.config.timezone),
    };
    Ok(Json(state.lunch.summary(date).await?))
}

#[derive(Debug, Deserialize)]
pub struct RingQuery {
    pub limit: Option<String>,
}

/// GET /rings?limit=n - 无法解析的 limit 使用默认值
pub async fn rings(
    State(state): State<ServerState>,
    Query(query): Query<RingQuery>,
) -> Json<Vec<RingEvent>> {
    let limit = query
        .limit
        .and_then(|l| l.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_RING_LIMIT)
        .min(MAX_RING_LIMIT);
    Json(state.orders.recent_rings(limit, now_millis()))
}

pub async fn presets(State(state): State<ServerState>) -> Json<Vec<Preset>> {
    Json(state.orders.presets())
}

/// POST /presets
pub async fn add_preset(
    State(state): State<ServerState>,
    LenientJson(payload): LenientJson<PresetCreate>,
) -> AppResult<(StatusCode, Json<Preset>)> {
    let preset = state.orders.add_preset(payload)?;
    Ok((StatusCode::CREATED, Json(preset)))
}
