//! API 错误类型与响应格式

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    /// 字段级校验错误（仅 validation_error 携带）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

/// 单个字段的校验错误
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
                fields: None,
            },
        }
    }

    pub fn with_fields(
        error_type: impl Into<String>,
        message: impl Into<String>,
        fields: Vec<FieldError>,
    ) -> Self {
        Self {
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
                fields: Some(fields),
            },
        }
    }
}

/// 业务错误
///
/// 每个变体对应唯一的 HTTP 状态码和错误类型字符串
#[derive(Debug)]
pub enum ApiError {
    /// 登录邮箱或密码错误
    InvalidCredentials,
    /// 修改凭据时当前密码确认失败
    WrongPassword,
    /// 资源不存在
    NotFound(String),
    /// 请求体字段校验失败
    Validation(Vec<FieldError>),
    /// 内部错误（存储失败等）
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::WrongPassword => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_error_response(self) -> ErrorResponse {
        match self {
            Self::InvalidCredentials => {
                ErrorResponse::new("invalid_credentials", "Incorrect email or password")
            }
            Self::WrongPassword => {
                ErrorResponse::new("wrong_password", "Current password is incorrect")
            }
            Self::NotFound(message) => ErrorResponse::new("not_found", message),
            Self::Validation(fields) => {
                ErrorResponse::with_fields("validation_error", "请求字段校验失败", fields)
            }
            Self::Internal(message) => ErrorResponse::new("internal_error", message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.into_error_response())).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::Internal(e.to_string())
    }
}
