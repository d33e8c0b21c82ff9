//! 博客文章数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::now_rfc3339;

/// 博客文章
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    /// 配图 URL（只存链接，不存文件）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// 创建时固定为操作者身份，之后不变
    pub author: String,
}

impl BlogPost {
    /// 创建新文章（服务端分配 id 和时间戳）
    pub fn new(
        title: String,
        content: String,
        image_url: Option<String>,
        author: String,
    ) -> Self {
        let now = now_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            image_url,
            created_at: now.clone(),
            updated_at: now,
            author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post() {
        let post = BlogPost::new(
            "标题".into(),
            "正文".into(),
            None,
            "admin@example.com".into(),
        );
        assert!(!post.id.is_empty());
        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(post.author, "admin@example.com");
    }
}
