//! 博客文章请求类型

use serde::Deserialize;

use crate::error::{ApiError, FieldError};

/// 创建文章请求
#[derive(Debug, Deserialize)]
pub struct BlogPostCreateRequest {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

impl BlogPostCreateRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut fields = Vec::new();
        if self.title.trim().is_empty() {
            fields.push(FieldError::new("title", "不能为空"));
        }
        if self.content.trim().is_empty() {
            fields.push(FieldError::new("content", "不能为空"));
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(fields))
        }
    }
}

/// 部分更新请求
///
/// 只合并请求中出现的字段，空补丁合法（仅刷新 updated_at）
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPostUpdateRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}
