use crate::{
    db::DbPool,
    dto::{CreateSupplierCategoryRequest, SupplierCategoryResponse, UpdateSupplierCategoryRequest},
    entities::supplier_category,
    errors::ServiceError,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Service for managing supplier categories.
///
/// Categories are never hard-deleted through this service; deletion
/// flips `is_active` and keeps the row so existing suppliers retain
/// their classification.
#[derive(Clone)]
pub struct SupplierCategoryService {
    db_pool: Arc<DbPool>,
}

impl SupplierCategoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Lists categories, active-only unless an explicit filter is given,
    /// ordered by name.
    #[instrument(skip(self))]
    pub async fn get_categories(
        &self,
        is_active: Option<bool>,
    ) -> Result<Vec<SupplierCategoryResponse>, ServiceError> {
        let db = &*self.db_pool;
        let categories = supplier_category::Entity::find()
            .filter(supplier_category::Column::IsActive.eq(is_active.unwrap_or(true)))
            .order_by_asc(supplier_category::Column::Name)
            .all(db)
            .await
            .map_err(|e| {
                error!("Failed to list supplier categories: {}", e);
                ServiceError::db_error(e)
            })?;

        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Gets a category by ID
    #[instrument(skip(self))]
    pub async fn get_category(
        &self,
        id: i32,
    ) -> Result<Option<SupplierCategoryResponse>, ServiceError> {
        let db = &*self.db_pool;
        let category = supplier_category::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch supplier category {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        Ok(category.map(Into::into))
    }

    /// Creates a new category. `is_active` defaults to true.
    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        request: CreateSupplierCategoryRequest,
    ) -> Result<SupplierCategoryResponse, ServiceError> {
        let db = &*self.db_pool;

        let model = supplier_category::ActiveModel {
            name: Set(request.name),
            description: Set(request.description),
            is_active: Set(request.is_active.unwrap_or(true)),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| {
            error!("Failed to create supplier category: {}", e);
            ServiceError::db_error(e)
        })?;

        info!(category_id = model.id, "Created supplier category");
        Ok(model.into())
    }

    /// Full replace of a category's mutable fields. Returns `None` when
    /// the category does not exist.
    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: i32,
        request: UpdateSupplierCategoryRequest,
    ) -> Result<Option<SupplierCategoryResponse>, ServiceError> {
        let db = &*self.db_pool;

        let Some(existing) = supplier_category::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch supplier category {}: {}", id, e);
                ServiceError::db_error(e)
            })?
        else {
            return Ok(None);
        };

        let mut active: supplier_category::ActiveModel = existing.into();
        active.name = Set(request.name);
        active.description = Set(request.description);
        active.is_active = Set(request.is_active);

        let updated = active.update(db).await.map_err(|e| {
            error!("Failed to update supplier category {}: {}", id, e);
            ServiceError::db_error(e)
        })?;

        info!(category_id = id, "Updated supplier category");
        Ok(Some(updated.into()))
    }

    /// Soft-deletes a category. Returns `false` when the category does
    /// not exist.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i32) -> Result<bool, ServiceError> {
        let db = &*self.db_pool;

        let Some(existing) = supplier_category::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch supplier category {}: {}", id, e);
                ServiceError::db_error(e)
            })?
        else {
            return Ok(false);
        };

        let mut active: supplier_category::ActiveModel = existing.into();
        active.is_active = Set(false);

        active.update(db).await.map_err(|e| {
            error!("Failed to deactivate supplier category {}: {}", id, e);
            ServiceError::db_error(e)
        })?;

        info!(category_id = id, "Deactivated supplier category");
        Ok(true)
    }

    /// Checks whether a category row exists (active or not)
    #[instrument(skip(self))]
    pub async fn category_exists(&self, id: i32) -> Result<bool, ServiceError> {
        let db = &*self.db_pool;
        let count = supplier_category::Entity::find()
            .filter(supplier_category::Column::Id.eq(id))
            .count(db)
            .await
            .map_err(|e| {
                error!("Failed to check supplier category {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        Ok(count > 0)
    }
}
