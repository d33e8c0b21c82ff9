//! 联系表单路由配置

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{
    list_business_contacts, list_individual_contacts, submit_business_contact,
    submit_individual_contact,
};
use super::store::ContactStore;
use crate::auth::{AuthState, require_auth};

/// 联系表单共享状态
#[derive(Clone)]
pub struct ContactState {
    pub store: Arc<ContactStore>,
}

/// 创建联系表单路由
///
/// # 端点
/// - `POST /contact/individual` - 提交个人表单（公开）
/// - `POST /contact/business` - 提交企业表单（公开）
/// - `GET /contact/individual` - 查看个人表单提交（需认证）
/// - `GET /contact/business` - 查看企业表单提交（需认证）
pub fn create_contact_router(store: ContactStore, auth: AuthState) -> Router {
    let state = ContactState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/contact/individual", post(submit_individual_contact))
        .route("/contact/business", post(submit_business_contact))
        .merge(
            Router::new()
                .route("/contact/individual", get(list_individual_contacts))
                .route("/contact/business", get(list_business_contacts))
                .layer(middleware::from_fn_with_state(auth, require_auth)),
        )
        .with_state(state)
}
