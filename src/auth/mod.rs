//! 认证模块
//!
//! JWT Token 签发/验证、管理员凭据存储、Bearer 认证中间件

pub mod credentials;
pub mod jwt;
pub mod middleware;

pub use credentials::{AuthError, CredentialStore};
pub use middleware::{AuthState, AuthUser, require_auth};
