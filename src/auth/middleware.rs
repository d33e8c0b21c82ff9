//! Bearer 认证中间件

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use super::jwt;
use crate::common::auth::extract_bearer_token;
use crate::error::ErrorResponse;

/// 认证中间件共享状态
#[derive(Clone)]
pub struct AuthState {
    /// JWT 签名密钥
    pub secret_key: String,
}

impl AuthState {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }
}

/// 通过认证的请求身份（写入 request extensions）
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// token 中的管理员邮箱
    pub email: String,
}

/// Bearer 认证中间件
///
/// 验证通过后将 [`AuthUser`] 注入 request extensions，
/// 供下游处理器读取操作者身份
pub async fn require_auth(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = extract_bearer_token(&request).map(str::to_owned);

    match token {
        Some(token) => match jwt::verify_token(&token, &state.secret_key) {
            Ok(claims) => {
                request.extensions_mut().insert(AuthUser { email: claims.sub });
                next.run(request).await
            }
            Err(_) => {
                let error = ErrorResponse::new("authentication_error", "Invalid or expired token");
                (StatusCode::UNAUTHORIZED, Json(error)).into_response()
            }
        },
        None => {
            let error = ErrorResponse::new("authentication_error", "Missing authorization token");
            (StatusCode::UNAUTHORIZED, Json(error)).into_response()
        }
    }
}
