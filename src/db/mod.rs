//! 共享 SQLite 存储
//!
//! 同步的 rusqlite 连接由互斥锁保护，异步调用通过 spawn_blocking 进入。
//! 四个集合各占一张表，文档字段直接映射为列。

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::Connection;

/// 建表语句（幂等）
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS about_revisions (
    id TEXT PRIMARY KEY,
    content TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    updated_by TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_about_updated ON about_revisions(updated_at);

CREATE TABLE IF NOT EXISTS blog_posts (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    image_url TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    author TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_blog_created ON blog_posts(created_at);

CREATE TABLE IF NOT EXISTS individual_contacts (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    message TEXT NOT NULL,
    privacy_agreed INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_individual_created ON individual_contacts(created_at);

CREATE TABLE IF NOT EXISTS business_contacts (
    id TEXT PRIMARY KEY,
    company_name TEXT NOT NULL,
    contact_person TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    message TEXT NOT NULL,
    privacy_agreed INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_business_created ON business_contacts(created_at);
";

/// 数据库句柄
///
/// 克隆开销低，可在各个 store 之间共享。单连接串行执行，
/// 写入的原子性由 SQLite 的单语句事务保证。
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// 打开数据库文件并初始化表结构
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 内存数据库（测试用）
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 在阻塞线程池中执行数据库操作
    ///
    /// 闭包在持有连接锁的情况下运行，检查加写入的复合操作天然原子
    pub async fn call<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            f(&conn)
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.call(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_call_returns_value() {
        let db = Database::open_in_memory().unwrap();
        let count: i64 = db
            .call(|conn| {
                let count = conn.query_row("SELECT COUNT(*) FROM blog_posts", [], |row| {
                    row.get(0)
                })?;
                Ok(count)
            })
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
