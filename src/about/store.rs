//! About Us 存储

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};

use super::model::AboutRevision;
use crate::db::Database;

/// 集合为空时合成的默认内容
const DEFAULT_CONTENT: &str = "Welcome! This page has not been written yet. \
Sign in to the admin dashboard to publish your organization's story.";

/// About Us 修订存储（追加式）
pub struct AboutStore {
    db: Database,
}

impl AboutStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 获取最新修订；集合为空时写入默认修订并返回
    ///
    /// 检查与插入在同一次连接锁内完成，空库的首次读取
    /// 只会产生一条默认修订
    pub async fn latest_or_init(&self) -> Result<AboutRevision> {
        self.db
            .call(|conn| {
                if let Some(revision) = query_latest(conn)? {
                    return Ok(revision);
                }

                let revision = AboutRevision::new(DEFAULT_CONTENT, "system");
                insert_revision(conn, &revision)?;
                tracing::info!(id = %revision.id, "about-us 集合为空，已写入默认内容");
                Ok(revision)
            })
            .await
    }

    /// 追加一条新修订
    pub async fn append(&self, revision: AboutRevision) -> Result<AboutRevision> {
        self.db
            .call(move |conn| {
                insert_revision(conn, &revision)?;
                Ok(revision)
            })
            .await
    }
}

fn query_latest(conn: &Connection) -> Result<Option<AboutRevision>> {
    let revision = conn
        .query_row(
            "SELECT id, content, updated_at, updated_by FROM about_revisions
             ORDER BY updated_at DESC, rowid DESC LIMIT 1",
            [],
            |row| {
                Ok(AboutRevision {
                    id: row.get(0)?,
                    content: row.get(1)?,
                    updated_at: row.get(2)?,
                    updated_by: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(revision)
}

fn insert_revision(conn: &Connection, revision: &AboutRevision) -> Result<()> {
    conn.execute(
        "INSERT INTO about_revisions (id, content, updated_at, updated_by)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            revision.id,
            revision.content,
            revision.updated_at,
            revision.updated_by,
        ],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_collection_synthesizes_default_once() {
        let store = AboutStore::new(Database::open_in_memory().unwrap());

        let first = store.latest_or_init().await.unwrap();
        assert_eq!(first.content, DEFAULT_CONTENT);
        assert_eq!(first.updated_by, "system");

        // 无写入的第二次读取返回同一条修订
        let second = store.latest_or_init().await.unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.updated_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_append_becomes_latest() {
        let store = AboutStore::new(Database::open_in_memory().unwrap());
        store.latest_or_init().await.unwrap();

        let appended = store
            .append(AboutRevision::new("新的内容", "admin@example.com"))
            .await
            .unwrap();
        let latest = store.latest_or_init().await.unwrap();
        assert_eq!(latest.id, appended.id);
        assert_eq!(latest.content, "新的内容");
        assert_eq!(latest.updated_by, "admin@example.com");
    }

    #[tokio::test]
    async fn test_revisions_are_never_overwritten() {
        let store = AboutStore::new(Database::open_in_memory().unwrap());
        store
            .append(AboutRevision::new("第一版", "admin@example.com"))
            .await
            .unwrap();
        store
            .append(AboutRevision::new("第二版", "admin@example.com"))
            .await
            .unwrap();

        let latest = store.latest_or_init().await.unwrap();
        assert_eq!(latest.content, "第二版");
    }
}
