//! Admin API 路由配置

use std::sync::Arc;

use axum::{Router, middleware, routing::post};

use super::handlers::{login, test_email, update_credentials};
use crate::auth::{AuthState, CredentialStore, require_auth};
use crate::notification::NotificationService;

/// Admin API 共享状态
#[derive(Clone)]
pub struct AdminState {
    /// 管理员凭据存储
    pub credentials: Arc<CredentialStore>,
    /// JWT 签名密钥
    pub secret_key: String,
    /// 邮件通知服务
    pub notifier: Arc<NotificationService>,
}

impl AdminState {
    pub fn new(
        credentials: Arc<CredentialStore>,
        secret_key: impl Into<String>,
        notifier: Arc<NotificationService>,
    ) -> Self {
        Self {
            credentials,
            secret_key: secret_key.into(),
            notifier,
        }
    }
}

/// 创建 Admin 路由
///
/// # 端点
/// - `POST /admin/login` - 登录（公开）
/// - `POST /admin/update` - 轮换凭据（需认证）
/// - `POST /admin/email/test` - 发送测试邮件（需认证）
pub fn create_admin_router(state: AdminState, auth: AuthState) -> Router {
    Router::new()
        .route("/admin/login", post(login))
        .merge(
            Router::new()
                .route("/admin/update", post(update_credentials))
                .route("/admin/email/test", post(test_email))
                .layer(middleware::from_fn_with_state(auth, require_auth)),
        )
        .with_state(state)
}
