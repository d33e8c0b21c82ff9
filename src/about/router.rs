//! About Us 路由配置

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::handlers::{get_about_us, update_about_us};
use super::store::AboutStore;
use crate::auth::{AuthState, require_auth};

/// About Us 共享状态
#[derive(Clone)]
pub struct AboutState {
    pub store: Arc<AboutStore>,
}

/// 创建 About Us 路由
///
/// # 端点
/// - `GET /about-us` - 获取最新内容（公开）
/// - `PUT /about-us` - 追加新修订（需认证）
pub fn create_about_router(store: AboutStore, auth: AuthState) -> Router {
    let state = AboutState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/about-us", get(get_about_us))
        .merge(
            Router::new()
                .route("/about-us", put(update_about_us))
                .layer(middleware::from_fn_with_state(auth, require_auth)),
        )
        .with_state(state)
}
