//! Admin API 类型定义

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldError};

/// 登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();
        if self.email.trim().is_empty() {
            fields.push(FieldError::new("email", "不能为空"));
        } else if !self.email.contains('@') {
            fields.push(FieldError::new("email", "邮箱格式无效"));
        }
        if self.password.is_empty() {
            fields.push(FieldError::new("password", "不能为空"));
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(fields))
        }
    }
}

/// 登录成功响应
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// token 有效期（秒）
    pub expires_in: u64,
}

/// 修改管理员凭据请求
///
/// email / new_password 均可选，未提供的字段保持不变；
/// current_password 必填，用于二次确认
#[derive(Debug, Deserialize)]
pub struct AdminUpdateRequest {
    pub email: Option<String>,
    pub current_password: String,
    pub new_password: Option<String>,
}

impl AdminUpdateRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();
        if self.current_password.is_empty() {
            fields.push(FieldError::new("current_password", "不能为空"));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                fields.push(FieldError::new("email", "邮箱格式无效"));
            }
        }
        if let Some(password) = &self.new_password {
            if password.is_empty() {
                fields.push(FieldError::new("new_password", "不能为空"));
            }
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(fields))
        }
    }
}

/// 操作成功响应
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
