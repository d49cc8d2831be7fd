//! 认证中间件
//!
//! 以 `route_layer` 方式挂在员工/厨房路由上，因此能读取 `{link}` 路径参数。
//!
//! # 错误处理
//!
//! | 错误 | HTTP 状态码 |
//! |------|------------|
//! | 访问链接不匹配 | 404 Not found |
//! | 无 Authorization 头 | 401 NotAuthenticated |
//! | 令牌过期 | 401 TokenExpired |
//! | 无效令牌 | 401 TokenInvalid |
//! | 角色不匹配 | 403 RoleRequired |

use std::collections::HashMap;

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::AppError;
use crate::auth::{CurrentSession, JwtError, JwtService, SessionRole};
use crate::core::ServerState;
use crate::security_log;
use shared::ErrorCode;

/// 比较访问链接
///
/// 比较双方的 SHA-256 摘要，耗时与前缀是否相同无关
pub fn link_matches(presented: &str, expected: &str) -> bool {
    Sha256::digest(presented.as_bytes()) == Sha256::digest(expected.as_bytes())
}

fn check_link(
    params: &HashMap<String, String>,
    expected: &str,
    role: SessionRole,
) -> Result<(), AppError> {
    let presented = params.get("link").map(String::as_str).unwrap_or_default();
    if link_matches(presented, expected) {
        return Ok(());
    }
    security_log!("WARN", "link_mismatch", role = role.as_str());
    Err(AppError::with_message(ErrorCode::NotFound, "Not found"))
}

/// 员工链接门禁
pub async fn require_employee_link(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_link(&params, &state.config.employee_link, SessionRole::Employee)?;
    Ok(next.run(req).await)
}

/// 厨房链接门禁
pub async fn require_kitchen_link(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_link(&params, &state.config.kitchen_link, SessionRole::Kitchen)?;
    Ok(next.run(req).await)
}

/// 验证 `Authorization: Bearer <token>` 并检查角色
fn authenticate(
    jwt_service: &JwtService,
    req: &Request,
    role: SessionRole,
) -> Result<CurrentSession, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    let session = match jwt_service.validate_token(token) {
        Ok(claims) => CurrentSession::from(claims),
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );
            return match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            };
        }
    };

    if session.role != role {
        security_log!(
            "WARN",
            "role_mismatch",
            required = role.as_str(),
            actual = session.role.as_str()
        );
        return Err(AppError::with_message(
            ErrorCode::RoleRequired,
            format!("{} session required", role.as_str()),
        ));
    }

    Ok(session)
}

/// 员工会话中间件 - 注入 [`CurrentSession`]
pub async fn require_employee_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = authenticate(&state.jwt_service, &req, SessionRole::Employee)?;
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

/// 厨房会话中间件 - 注入 [`CurrentSession`]
pub async fn require_kitchen_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = authenticate(&state.jwt_service, &req, SessionRole::Kitchen)?;
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
