//! Session issuing shared by the employee and kitchen routers

use shared::models::SessionInfo;

use crate::AppError;
use crate::auth::{JwtService, SessionRole};

/// 厨房会话的 subject
pub const KITCHEN_SUBJECT: &str = "kitchen";

pub fn issue(
    jwt_service: &JwtService,
    subject: &str,
    role: SessionRole,
) -> Result<SessionInfo, AppError> {
    let token = jwt_service.generate_token(subject, role).map_err(|e| {
        tracing::error!(error = %e, "Failed to issue session token");
        AppError::internal("Failed to issue session token")
    })?;

    tracing::info!(role = role.as_str(), subject = %subject, "Session opened");
    Ok(SessionInfo {
        token,
        role: role.as_str().to_string(),
        employee_name: (role == SessionRole::Employee).then(|| subject.to_string()),
        expires_in_minutes: jwt_service.config.expiration_minutes,
    })
}
