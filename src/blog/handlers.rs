//! 博客文章 HTTP 处理器

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use super::model::BlogPost;
use super::router::BlogState;
use super::types::{BlogPostCreateRequest, BlogPostUpdateRequest};
use crate::admin::types::SuccessResponse;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// GET /api/blog-posts
pub async fn list_blog_posts(State(state): State<BlogState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state.store.list().await?;
    Ok(Json(posts))
}

/// GET /api/blog-posts/{id}
pub async fn get_blog_post(
    State(state): State<BlogState>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    match state.store.get(id).await? {
        Some(post) => Ok(Json(post)),
        None => Err(ApiError::NotFound("Blog post not found".into())),
    }
}

/// POST /api/blog-posts
///
/// author 取自 token 身份
pub async fn create_blog_post(
    State(state): State<BlogState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<BlogPostCreateRequest>,
) -> Result<Json<BlogPost>, ApiError> {
    payload.validate()?;

    let post = BlogPost::new(payload.title, payload.content, payload.image_url, user.email);
    let post = state.store.insert(post).await?;
    tracing::info!(id = %post.id, author = %post.author, "博客文章已创建");
    Ok(Json(post))
}

/// PUT /api/blog-posts/{id}
///
/// 部分更新，未出现的字段保持不变
pub async fn update_blog_post(
    State(state): State<BlogState>,
    Path(id): Path<String>,
    Json(payload): Json<BlogPostUpdateRequest>,
) -> Result<Json<BlogPost>, ApiError> {
    match state.store.update(id, payload).await? {
        Some(post) => {
            tracing::info!(id = %post.id, "博客文章已更新");
            Ok(Json(post))
        }
        None => Err(ApiError::NotFound("Blog post not found".into())),
    }
}

/// DELETE /api/blog-posts/{id}
pub async fn delete_blog_post(
    State(state): State<BlogState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if state.store.delete(id.clone()).await? {
        tracing::info!(id = %id, "博客文章已删除");
        Ok(Json(SuccessResponse::new("Blog post deleted successfully")))
    } else {
        Err(ApiError::NotFound("Blog post not found".into()))
    }
}
