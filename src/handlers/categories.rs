use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::dto::{CreateSupplierCategoryRequest, UpdateSupplierCategoryRequest};
use crate::errors::ApiError;
use crate::AppState;
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListParams {
    pub is_active: Option<bool>,
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.services.categories.get_categories(params.is_active).await?;
    Ok(success_response(categories))
}

async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let category = state
        .services
        .categories
        .get_category(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Supplier category {} not found", id)))?;
    Ok(success_response(category))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSupplierCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&request)?;
    let category = state.services.categories.create_category(request).await?;
    let location = format!("/v1/supplier-categories/{}", category.id);
    Ok(created_response(location, category))
}

async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateSupplierCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&request)?;
    let category = state
        .services
        .categories
        .update_category(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Supplier category {} not found", id)))?;
    Ok(success_response(category))
}

async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.services.categories.delete_category(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!(
            "Supplier category {} not found",
            id
        )));
    }
    Ok(no_content_response())
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}
