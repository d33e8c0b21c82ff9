//! 联系表单 HTTP 处理器

use axum::{Json, extract::State};

use super::model::{BusinessContact, IndividualContact};
use super::router::ContactState;
use super::types::{BusinessContactRequest, IndividualContactRequest};
use crate::error::ApiError;

/// POST /api/contact/individual（公开）
pub async fn submit_individual_contact(
    State(state): State<ContactState>,
    Json(payload): Json<IndividualContactRequest>,
) -> Result<Json<IndividualContact>, ApiError> {
    payload.validate()?;

    let contact = IndividualContact::new(
        payload.name,
        payload.email,
        payload.phone,
        payload.message,
        payload.privacy_agreed,
    );
    let contact = state.store.insert_individual(contact).await?;
    tracing::info!(id = %contact.id, "收到个人联系表单");
    Ok(Json(contact))
}

/// POST /api/contact/business（公开）
pub async fn submit_business_contact(
    State(state): State<ContactState>,
    Json(payload): Json<BusinessContactRequest>,
) -> Result<Json<BusinessContact>, ApiError> {
    payload.validate()?;

    let contact = BusinessContact::new(
        payload.company_name,
        payload.contact_person,
        payload.email,
        payload.phone,
        payload.message,
        payload.privacy_agreed,
    );
    let contact = state.store.insert_business(contact).await?;
    tracing::info!(id = %contact.id, "收到企业联系表单");
    Ok(Json(contact))
}

/// GET /api/contact/individual（需认证）
pub async fn list_individual_contacts(
    State(state): State<ContactState>,
) -> Result<Json<Vec<IndividualContact>>, ApiError> {
    let contacts = state.store.list_individual().await?;
    Ok(Json(contacts))
}

/// GET /api/contact/business（需认证）
pub async fn list_business_contacts(
    State(state): State<ContactState>,
) -> Result<Json<Vec<BusinessContact>>, ApiError> {
    let contacts = state.store.list_business().await?;
    Ok(Json(contacts))
}
