//! 博客文章存储

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::model::BlogPost;
use super::types::BlogPostUpdateRequest;
use crate::common::now_rfc3339;
use crate::db::Database;

/// 博客文章存储
pub struct BlogStore {
    db: Database,
}

impl BlogStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 插入新文章
    pub async fn insert(&self, post: BlogPost) -> Result<BlogPost> {
        self.db
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO blog_posts (id, title, content, image_url, created_at, updated_at, author)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        post.id,
                        post.title,
                        post.content,
                        post.image_url,
                        post.created_at,
                        post.updated_at,
                        post.author,
                    ],
                )?;
                Ok(post)
            })
            .await
    }

    /// 列出全部文章，创建时间倒序
    pub async fn list(&self) -> Result<Vec<BlogPost>> {
        self.db
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, title, content, image_url, created_at, updated_at, author
                     FROM blog_posts ORDER BY created_at DESC, rowid DESC",
                )?;
                let posts = stmt
                    .query_map([], row_to_post)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(posts)
            })
            .await
    }

    /// 按 id 获取文章
    pub async fn get(&self, id: String) -> Result<Option<BlogPost>> {
        self.db.call(move |conn| query_post(conn, &id)).await
    }

    /// 部分更新
    ///
    /// 只覆盖补丁中出现的字段，刷新 updated_at；
    /// 读取、合并、写回在同一次连接锁内完成
    pub async fn update(
        &self,
        id: String,
        patch: BlogPostUpdateRequest,
    ) -> Result<Option<BlogPost>> {
        self.db
            .call(move |conn| {
                let Some(mut post) = query_post(conn, &id)? else {
                    return Ok(None);
                };

                if let Some(title) = patch.title {
                    post.title = title;
                }
                if let Some(content) = patch.content {
                    post.content = content;
                }
                if let Some(image_url) = patch.image_url {
                    post.image_url = Some(image_url);
                }
                post.updated_at = now_rfc3339();

                conn.execute(
                    "UPDATE blog_posts SET title = ?2, content = ?3, image_url = ?4, updated_at = ?5
                     WHERE id = ?1",
                    params![post.id, post.title, post.content, post.image_url, post.updated_at],
                )?;
                Ok(Some(post))
            })
            .await
    }

    /// 删除文章，返回是否存在
    pub async fn delete(&self, id: String) -> Result<bool> {
        self.db
            .call(move |conn| {
                let affected = conn.execute("DELETE FROM blog_posts WHERE id = ?1", params![id])?;
                Ok(affected > 0)
            })
            .await
    }
}

fn query_post(conn: &Connection, id: &str) -> Result<Option<BlogPost>> {
    let post = conn
        .query_row(
            "SELECT id, title, content, image_url, created_at, updated_at, author
             FROM blog_posts WHERE id = ?1",
            params![id],
            row_to_post,
        )
        .optional()?;
    Ok(post)
}

fn row_to_post(row: &Row<'_>) -> rusqlite::Result<BlogPost> {
    Ok(BlogPost {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        image_url: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
        author: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(title: &str) -> BlogPost {
        BlogPost::new(
            title.to_string(),
            "正文内容".to_string(),
            None,
            "admin@example.com".to_string(),
        )
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = BlogStore::new(Database::open_in_memory().unwrap());
        let post = store.insert(sample_post("第一篇")).await.unwrap();

        let fetched = store.get(post.id.clone()).await.unwrap().unwrap();
        assert_eq!(fetched.title, "第一篇");
        assert_eq!(fetched.author, post.author);
        assert_eq!(fetched.created_at, post.created_at);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = BlogStore::new(Database::open_in_memory().unwrap());
        assert!(store.get("no-such-id".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = BlogStore::new(Database::open_in_memory().unwrap());
        store.insert(sample_post("旧文章")).await.unwrap();
        store.insert(sample_post("新文章")).await.unwrap();

        let posts = store.list().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "新文章");
        assert_eq!(posts[1].title, "旧文章");
    }

    #[tokio::test]
    async fn test_partial_update_merges_fields() {
        let store = BlogStore::new(Database::open_in_memory().unwrap());
        let post = store.insert(sample_post("原标题")).await.unwrap();

        let updated = store
            .update(
                post.id.clone(),
                BlogPostUpdateRequest {
                    title: Some("新标题".into()),
                    content: None,
                    image_url: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        // 只有 title 变化，其余字段保留
        assert_eq!(updated.title, "新标题");
        assert_eq!(updated.content, post.content);
        assert_eq!(updated.image_url, None);
        assert_eq!(updated.author, post.author);
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at() {
        let store = BlogStore::new(Database::open_in_memory().unwrap());
        let post = store.insert(sample_post("标题")).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let updated = store
            .update(
                post.id.clone(),
                BlogPostUpdateRequest {
                    title: None,
                    content: None,
                    image_url: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.updated_at > post.updated_at);
        assert_eq!(updated.created_at, post.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = BlogStore::new(Database::open_in_memory().unwrap());
        let result = store
            .update(
                "no-such-id".into(),
                BlogPostUpdateRequest {
                    title: Some("x".into()),
                    content: None,
                    image_url: None,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = BlogStore::new(Database::open_in_memory().unwrap());
        let post = store.insert(sample_post("待删除")).await.unwrap();

        assert!(store.delete(post.id.clone()).await.unwrap());
        // 第二次删除同一 id 返回不存在
        assert!(!store.delete(post.id.clone()).await.unwrap());
        assert!(store.get(post.id).await.unwrap().is_none());
    }
}
