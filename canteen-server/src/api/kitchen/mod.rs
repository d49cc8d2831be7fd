//! 厨房接口
//!
//! # 路由列表 (前缀 `/api/kitchen/{link}`)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /session | POST | 开启厨房会话 |
//! | /orders | GET | 时间窗口内的订单 + 建议出餐时间 |
//! | /orders/{id}/status | POST | 修改订单状态 |
//! | /orders/{id}/prep | POST | 设置备餐时间 |
//! | /orders/{id}/voice | GET | 播放语音留言 |
//! | /lunch-ready | GET/POST | 查询 / 设置午餐已备好 |
//! | /menu | GET | 菜单及供应状态 |
//! | /menu/availability | POST | 设置菜品供应状态 |
//! | /lunch | GET | 某日签到名单与人数预测 |
//! | /rings | GET | 最近的呼叫 |
//! | /presets | GET/POST | 预设订单列表 / 新增 |
//!
//! 除 /session 外都需要厨房会话令牌。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{require_kitchen_link, require_kitchen_session};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let protected = Router::new()
        .route("/orders", get(handler::list_orders))
        .route("/orders/{id}/status", post(handler::update_status))
        .route("/orders/{id}/prep", post(handler::update_prep))
        .route("/orders/{id}/voice", get(handler::voice))
        .route(
            "/lunch-ready",
            get(handler::lunch_ready).post(handler::set_lunch_ready),
        )
        .route("/menu", get(handler::menu))
        .route("/menu/availability", post(handler::set_availability))
        .route("/lunch", get(handler::lunch_summary))
        .route("/rings", get(handler::rings))
        .route("/presets", get(handler::presets).post(handler::add_preset))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_kitchen_session,
        ));

    Router::new()
        .route("/session", post(handler::open_session))
        .merge(protected)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_kitchen_link,
        ))
}
