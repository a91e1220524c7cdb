use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::dto::{CreateSupplierContactRequest, UpdateSupplierContactRequest};
use crate::errors::ApiError;
use crate::AppState;
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

async fn list_contacts_by_supplier(
    State(state): State<Arc<AppState>>,
    Path(supplier_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let contacts = state
        .services
        .contacts
        .get_contacts_by_supplier(supplier_id)
        .await?;
    Ok(success_response(contacts))
}

async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let contact = state
        .services
        .contacts
        .get_contact(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Supplier contact {} not found", id)))?;
    Ok(success_response(contact))
}

async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSupplierContactRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&request)?;
    let contact = state.services.contacts.create_contact(request).await?;
    let location = format!("/v1/supplier-contacts/{}", contact.id);
    Ok(created_response(location, contact))
}

async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateSupplierContactRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&request)?;
    let contact = state
        .services
        .contacts
        .update_contact(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Supplier contact {} not found", id)))?;
    Ok(success_response(contact))
}

async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.services.contacts.delete_contact(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!(
            "Supplier contact {} not found",
            id
        )));
    }
    Ok(no_content_response())
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_contact))
        .route("/supplier/:supplier_id", get(list_contacts_by_supplier))
        .route(
            "/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}
