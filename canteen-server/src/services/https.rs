use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
///
/// 员工与厨房路由需要 state 来挂载链接与会话中间件
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .nest("/api/employee/{link}", crate::api::employee::router(state))
        .nest("/api/kitchen/{link}", crate::api::kitchen::router(state))
        // 菜单图片 - 公共静态文件
        .nest_service("/menu-images", ServeDir::new(&state.config.menu_assets_dir))
}

/// Build the complete service: routes, state and tower-http layers
pub fn build_router(state: ServerState) -> Router {
    build_app(&state)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
