//! 管理员凭据存储
//!
//! 单一管理员身份，启动时从配置载入，运行时可整体更新。
//! 密码只保存 SHA256 哈希，比较走常量时间路径。

use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use crate::common::auth::constant_time_eq;

/// 认证错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// 登录凭据或 token 无效
    InvalidCredentials,
    /// 当前密码确认失败
    WrongPassword,
}

impl From<AuthError> for crate::error::ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::WrongPassword => Self::WrongPassword,
        }
    }
}

/// 管理员身份
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub email: String,
    pub password_hash: String,
}

/// 对密码做 SHA256 哈希，返回 hex 字符串
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// 管理员凭据存储
///
/// 进程内单例，更新在写锁内完成（校验与修改原子）
pub struct CredentialStore {
    identity: RwLock<AdminIdentity>,
}

impl CredentialStore {
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        Self {
            identity: RwLock::new(AdminIdentity {
                email: email.into(),
                password_hash: hash_password(password),
            }),
        }
    }

    /// 校验登录凭据
    ///
    /// 邮箱区分大小写；密码比较哈希值的常量时间相等
    pub fn authenticate(&self, email: &str, password: &str) -> bool {
        let identity = self.identity.read();
        identity.email == email
            && constant_time_eq(&hash_password(password), &identity.password_hash)
    }

    /// 当前管理员邮箱
    pub fn current_email(&self) -> String {
        self.identity.read().email.clone()
    }

    /// 更新管理员凭据
    ///
    /// 要求提供当前明文密码做二次确认；email / password 均可选，
    /// 未提供的字段保持不变
    pub fn update(
        &self,
        current_password: &str,
        new_email: Option<&str>,
        new_password: Option<&str>,
    ) -> Result<(), AuthError> {
        let mut identity = self.identity.write();

        if !constant_time_eq(&hash_password(current_password), &identity.password_hash) {
            return Err(AuthError::WrongPassword);
        }

        if let Some(email) = new_email {
            identity.email = email.to_string();
        }
        if let Some(password) = new_password {
            identity.password_hash = hash_password(password);
        }

        Ok(())
    }
}
