//! About Us 请求类型

use serde::Deserialize;

use crate::error::{ApiError, FieldError};

/// 更新内容请求（实际为追加新修订）
#[derive(Debug, Deserialize)]
pub struct AboutUpdateRequest {
    pub content: String,
}

impl AboutUpdateRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.content.trim().is_empty() {
            return Err(ApiError::Validation(vec![FieldError::new(
                "content",
                "不能为空",
            )]));
        }
        Ok(())
    }
}
