use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::dto::{CreateSupplierRequest, UpdateSupplierRequest};
use crate::entities::supplier::SupplierStatus;
use crate::errors::ApiError;
use crate::services::suppliers::SupplierListQuery;
use crate::AppState;
use axum::{
    extract::{Json, Path, Query, State},
    http::{header::HeaderName, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

static X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");
static X_PAGE: HeaderName = HeaderName::from_static("x-page");
static X_PAGE_SIZE: HeaderName = HeaderName::from_static("x-page-size");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub search: Option<String>,
    pub status: Option<SupplierStatus>,
    pub category_id: Option<i32>,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    20
}

async fn list_suppliers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SupplierListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = SupplierListQuery {
        page: params.page,
        page_size: params.page_size,
        search: params.search,
        status: params.status,
        category_id: params.category_id,
    };
    let (suppliers, total) = state.services.suppliers.get_suppliers(query).await?;

    Ok((
        StatusCode::OK,
        [
            (X_TOTAL_COUNT.clone(), total.to_string()),
            (X_PAGE.clone(), params.page.to_string()),
            (X_PAGE_SIZE.clone(), params.page_size.to_string()),
        ],
        axum::Json(suppliers),
    ))
}

async fn get_supplier(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let supplier = state
        .services
        .suppliers
        .get_supplier(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Supplier {} not found", id)))?;
    Ok(success_response(supplier))
}

async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&request)?;
    let supplier = state.services.suppliers.create_supplier(request).await?;
    let location = format!("/v1/suppliers/{}", supplier.id);
    Ok(created_response(location, supplier))
}

async fn update_supplier(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateSupplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&request)?;
    let supplier = state
        .services
        .suppliers
        .update_supplier(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Supplier {} not found", id)))?;
    Ok(success_response(supplier))
}

async fn delete_supplier(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.services.suppliers.delete_supplier(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Supplier {} not found", id)));
    }
    Ok(no_content_response())
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route(
            "/:id",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}
