//! About Us HTTP 处理器

use axum::{Extension, Json, extract::State};

use super::model::AboutRevision;
use super::router::AboutState;
use super::types::AboutUpdateRequest;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// GET /api/about-us
///
/// 返回最新内容，集合为空时合成默认内容
pub async fn get_about_us(State(state): State<AboutState>) -> Result<Json<AboutRevision>, ApiError> {
    let revision = state.store.latest_or_init().await?;
    Ok(Json(revision))
}

/// PUT /api/about-us
///
/// 追加新修订，updated_by 取自 token 身份
pub async fn update_about_us(
    State(state): State<AboutState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AboutUpdateRequest>,
) -> Result<Json<AboutRevision>, ApiError> {
    payload.validate()?;

    let revision = AboutRevision::new(payload.content, user.email);
    let revision = state.store.append(revision).await?;
    tracing::info!(id = %revision.id, updated_by = %revision.updated_by, "about-us 内容已更新");
    Ok(Json(revision))
}
