//! About Us 数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::now_rfc3339;

/// 单条内容修订
///
/// 插入后不可变；"当前内容" = updated_at 最新的一条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutRevision {
    pub id: String,
    pub content: String,
    pub updated_at: String,
    pub updated_by: String,
}

impl AboutRevision {
    /// 创建新修订（服务端分配 id 和时间戳）
    pub fn new(content: impl Into<String>, updated_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            updated_at: now_rfc3339(),
            updated_by: updated_by.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_id_and_timestamp() {
        let a = AboutRevision::new("hello", "admin@example.com");
        let b = AboutRevision::new("hello", "admin@example.com");
        assert_ne!(a.id, b.id);
        assert!(!a.updated_at.is_empty());
        assert_eq!(a.updated_by, "admin@example.com");
    }
}
