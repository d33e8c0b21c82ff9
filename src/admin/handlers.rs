//! Admin API HTTP 处理器

use axum::{Extension, Json, extract::State};

use super::router::AdminState;
use super::types::{AdminUpdateRequest, LoginRequest, LoginResponse, SuccessResponse};
use crate::auth::{AuthError, AuthUser, jwt};
use crate::error::ApiError;

/// POST /api/admin/login
///
/// 校验邮箱和密码，返回 Bearer token
pub async fn login(
    State(state): State<AdminState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    payload.validate()?;

    if !state.credentials.authenticate(&payload.email, &payload.password) {
        tracing::warn!(email = %payload.email, "登录失败");
        return Err(AuthError::InvalidCredentials.into());
    }

    let (access_token, expires_in) = jwt::generate_token(&payload.email, &state.secret_key)
        .map_err(|e| ApiError::Internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(email = %payload.email, "管理员登录成功");
    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in,
    }))
}

/// POST /api/admin/update
///
/// 轮换管理员邮箱/密码，需要有效 token 加当前密码二次确认
pub async fn update_credentials(
    State(state): State<AdminState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AdminUpdateRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    payload.validate()?;

    state.credentials.update(
        &payload.current_password,
        payload.email.as_deref(),
        payload.new_password.as_deref(),
    )?;

    tracing::info!(operator = %user.email, "管理员凭据已更新");
    Ok(Json(SuccessResponse::new(
        "Admin credentials updated successfully",
    )))
}

/// POST /api/admin/email/test
///
/// 通过配置的 SMTP 发送测试邮件
pub async fn test_email(
    State(state): State<AdminState>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .notifier
        .send_test_email()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(SuccessResponse::new("测试邮件发送成功")))
}
