use crate::{
    db::DbPool,
    dto::{
        CreateSupplierRequest, SupplierDetailResponse, SupplierResponse, UpdateSupplierRequest,
    },
    entities::{
        supplier::{self, SupplierStatus},
        supplier_address, supplier_category, supplier_contact, supplier_document, supplier_rating,
    },
    errors::ServiceError,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{error, info, instrument};

const MAX_PAGE_SIZE: u64 = 100;

/// Filters accepted by the supplier listing
#[derive(Debug, Default, Clone)]
pub struct SupplierListQuery {
    /// 1-based page number
    pub page: u64,
    pub page_size: u64,
    /// Substring match against name, description and website
    pub search: Option<String>,
    pub status: Option<SupplierStatus>,
    pub category_id: Option<i32>,
}

/// Service for managing suppliers and their nested object graph.
///
/// Supplier deletion is hard; contacts, addresses, documents and
/// ratings go with the row via engine-level cascades.
#[derive(Clone)]
pub struct SupplierService {
    db_pool: Arc<DbPool>,
}

impl SupplierService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Lists suppliers with paging, search and exact-match filters,
    /// ordered by name. Returns the page plus the total row count
    /// across all pages.
    #[instrument(skip(self))]
    pub async fn get_suppliers(
        &self,
        query: SupplierListQuery,
    ) -> Result<(Vec<SupplierResponse>, u64), ServiceError> {
        let db = &*self.db_pool;

        let page = query.page.max(1);
        let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);

        let mut select = supplier::Entity::find()
            .find_also_related(supplier_category::Entity)
            .order_by_asc(supplier::Column::Name);

        if let Some(term) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", term.trim());
            select = select.filter(
                Condition::any()
                    .add(supplier::Column::Name.like(&pattern))
                    .add(supplier::Column::Description.like(&pattern))
                    .add(supplier::Column::Website.like(&pattern)),
            );
        }

        if let Some(status) = query.status {
            select = select.filter(supplier::Column::Status.eq(status));
        }

        if let Some(category_id) = query.category_id {
            select = select.filter(supplier::Column::CategoryId.eq(category_id));
        }

        let paginator = select.paginate(db, page_size);

        let total = paginator.num_items().await.map_err(|e| {
            error!("Failed to count suppliers: {}", e);
            ServiceError::db_error(e)
        })?;

        let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
            error!("Failed to list suppliers: {}", e);
            ServiceError::db_error(e)
        })?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Gets a supplier with its full object graph: category, active
    /// contacts, active addresses, active documents and all ratings.
    /// Returns `None` when the supplier does not exist.
    #[instrument(skip(self))]
    pub async fn get_supplier(
        &self,
        id: i32,
    ) -> Result<Option<SupplierDetailResponse>, ServiceError> {
        let db = &*self.db_pool;

        let Some(model) = supplier::Entity::find_by_id(id).one(db).await.map_err(|e| {
            error!("Failed to fetch supplier {}: {}", id, e);
            ServiceError::db_error(e)
        })?
        else {
            return Ok(None);
        };

        let category = match model.category_id {
            Some(category_id) => supplier_category::Entity::find_by_id(category_id)
                .one(db)
                .await
                .map_err(|e| {
                    error!("Failed to fetch category for supplier {}: {}", id, e);
                    ServiceError::db_error(e)
                })?,
            None => None,
        };

        let contacts = supplier_contact::Entity::find()
            .filter(supplier_contact::Column::SupplierId.eq(id))
            .filter(supplier_contact::Column::IsActive.eq(true))
            .order_by_asc(supplier_contact::Column::Role)
            .order_by_asc(supplier_contact::Column::FirstName)
            .all(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch contacts for supplier {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        let addresses = supplier_address::Entity::find()
            .filter(supplier_address::Column::SupplierId.eq(id))
            .filter(supplier_address::Column::IsActive.eq(true))
            .order_by_asc(supplier_address::Column::Type)
            .all(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch addresses for supplier {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        let documents = supplier_document::Entity::find()
            .filter(supplier_document::Column::SupplierId.eq(id))
            .filter(supplier_document::Column::IsActive.eq(true))
            .order_by_asc(supplier_document::Column::Type)
            .all(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch documents for supplier {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        let ratings = supplier_rating::Entity::find()
            .filter(supplier_rating::Column::SupplierId.eq(id))
            .order_by_desc(supplier_rating::Column::RatingDate)
            .all(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ratings for supplier {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        Ok(Some(SupplierDetailResponse {
            supplier: (model, category.clone()).into(),
            category: category.map(Into::into),
            contacts: contacts.into_iter().map(Into::into).collect(),
            addresses: addresses.into_iter().map(Into::into).collect(),
            documents: documents.into_iter().map(Into::into).collect(),
            ratings: ratings.into_iter().map(Into::into).collect(),
        }))
    }

    /// Creates a supplier from scalar fields. Status defaults to
    /// Pending when omitted.
    #[instrument(skip(self))]
    pub async fn create_supplier(
        &self,
        request: CreateSupplierRequest,
    ) -> Result<SupplierResponse, ServiceError> {
        let db = &*self.db_pool;

        let model = supplier::ActiveModel {
            name: Set(request.name),
            registration_number: Set(request.registration_number),
            tax_id: Set(request.tax_id),
            website: Set(request.website),
            description: Set(request.description),
            status: Set(request.status.unwrap_or(SupplierStatus::Pending)),
            category_id: Set(request.category_id),
            country_id: Set(request.country_id),
            currency_id: Set(request.currency_id),
            lead_time_days: Set(request.lead_time_days),
            minimum_order_amount: Set(request.minimum_order_amount),
            payment_terms: Set(request.payment_terms),
            credit_limit: Set(request.credit_limit),
            quality_rating: Set(request.quality_rating),
            delivery_rating: Set(request.delivery_rating),
            service_rating: Set(request.service_rating),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| {
            error!("Failed to create supplier: {}", e);
            ServiceError::db_error(e)
        })?;

        info!(supplier_id = model.id, "Created supplier");
        Ok(model.into())
    }

    /// Full replace of a supplier's scalar fields. Returns `None` when
    /// the supplier does not exist.
    #[instrument(skip(self))]
    pub async fn update_supplier(
        &self,
        id: i32,
        request: UpdateSupplierRequest,
    ) -> Result<Option<SupplierResponse>, ServiceError> {
        let db = &*self.db_pool;

        let Some(existing) = supplier::Entity::find_by_id(id).one(db).await.map_err(|e| {
            error!("Failed to fetch supplier {}: {}", id, e);
            ServiceError::db_error(e)
        })?
        else {
            return Ok(None);
        };

        let mut active: supplier::ActiveModel = existing.into();
        active.name = Set(request.name);
        active.registration_number = Set(request.registration_number);
        active.tax_id = Set(request.tax_id);
        active.website = Set(request.website);
        active.description = Set(request.description);
        active.status = Set(request.status);
        active.category_id = Set(request.category_id);
        active.country_id = Set(request.country_id);
        active.currency_id = Set(request.currency_id);
        active.lead_time_days = Set(request.lead_time_days);
        active.minimum_order_amount = Set(request.minimum_order_amount);
        active.payment_terms = Set(request.payment_terms);
        active.credit_limit = Set(request.credit_limit);
        active.quality_rating = Set(request.quality_rating);
        active.delivery_rating = Set(request.delivery_rating);
        active.service_rating = Set(request.service_rating);

        let updated = active.update(db).await.map_err(|e| {
            error!("Failed to update supplier {}: {}", id, e);
            ServiceError::db_error(e)
        })?;

        info!(supplier_id = id, "Updated supplier");
        Ok(Some(updated.into()))
    }

    /// Hard-deletes a supplier; contacts, addresses, documents and
    /// ratings cascade at the engine level. Returns `false` when the
    /// supplier does not exist.
    #[instrument(skip(self))]
    pub async fn delete_supplier(&self, id: i32) -> Result<bool, ServiceError> {
        let db = &*self.db_pool;

        let result = supplier::Entity::delete_by_id(id)
            .exec(db)
            .await
            .map_err(|e| {
                error!("Failed to delete supplier {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        if result.rows_affected > 0 {
            info!(supplier_id = id, "Deleted supplier");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Checks whether a supplier row exists
    #[instrument(skip(self))]
    pub async fn supplier_exists(&self, id: i32) -> Result<bool, ServiceError> {
        let db = &*self.db_pool;
        let count = supplier::Entity::find()
            .filter(supplier::Column::Id.eq(id))
            .count(db)
            .await
            .map_err(|e| {
                error!("Failed to check supplier {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        Ok(count > 0)
    }
}
