//! 员工接口
//!
//! # 路由列表 (前缀 `/api/employee/{link}`)
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /session | POST | 以员工姓名开启会话 | 链接 |
//! | /menu | GET | 菜单及供应状态 | 员工会话 |
//! | /presets | GET | 预设订单 | 员工会话 |
//! | /orders | POST | 下单 (multipart) | 员工会话 |
//! | /orders | GET | 自己或同伴的订单 | 员工会话 |
//! | /orders/{id} | GET | 查询单个订单 | 员工会话 |
//! | /orders/{id}/cancel | POST | 取消订单 | 员工会话 |
//! | /ring | POST | 呼叫厨房 | 员工会话 |
//! | /lunch-ready | GET | 午餐是否已备好 | 员工会话 |
//! | /lunch | GET/POST | 今日签到状态 / 切换签到 | 员工会话 |

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};

use crate::auth::{require_employee_link, require_employee_session};
use crate::core::ServerState;
use crate::services::voice::MAX_VOICE_SIZE;

/// 语音留言之外给其他表单字段留的余量
const ORDER_FORM_OVERHEAD: usize = 1024 * 1024;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let protected = Router::new()
        .route("/menu", get(handler::menu))
        .route("/presets", get(handler::presets))
        .route(
            "/orders",
            get(handler::my_orders)
                .post(handler::create_order)
                .layer(DefaultBodyLimit::max(MAX_VOICE_SIZE + ORDER_FORM_OVERHEAD)),
        )
        .route("/orders/{id}", get(handler::get_order))
        .route("/orders/{id}/cancel", post(handler::cancel_order))
        .route("/ring", post(handler::ring))
        .route("/lunch-ready", get(handler::lunch_ready))
        .route("/lunch", get(handler::lunch_status).post(handler::toggle_lunch))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_employee_session,
        ));

    Router::new()
        .route("/session", post(handler::open_session))
        .merge(protected)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_employee_link,
        ))
}
