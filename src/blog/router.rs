//! 博客文章路由配置

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{
    create_blog_post, delete_blog_post, get_blog_post, list_blog_posts, update_blog_post,
};
use super::store::BlogStore;
use crate::auth::{AuthState, require_auth};

/// 博客模块共享状态
#[derive(Clone)]
pub struct BlogState {
    pub store: Arc<BlogStore>,
}

/// 创建博客路由
///
/// # 端点
/// - `GET /blog-posts` - 列出全部文章（公开）
/// - `GET /blog-posts/{id}` - 获取单篇文章（公开）
/// - `POST /blog-posts` - 创建文章（需认证）
/// - `PUT /blog-posts/{id}` - 部分更新（需认证）
/// - `DELETE /blog-posts/{id}` - 删除（需认证）
pub fn create_blog_router(store: BlogStore, auth: AuthState) -> Router {
    let state = BlogState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/blog-posts", get(list_blog_posts))
        .route("/blog-posts/{id}", get(get_blog_post))
        .merge(
            Router::new()
                .route("/blog-posts", post(create_blog_post))
                .route(
                    "/blog-posts/{id}",
                    put(update_blog_post).delete(delete_blog_post),
                )
                .layer(middleware::from_fn_with_state(auth, require_auth)),
        )
        .with_state(state)
}
