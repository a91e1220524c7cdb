use crate::{
    db::DbPool,
    dto::{CreateSupplierContactRequest, SupplierContactResponse, UpdateSupplierContactRequest},
    entities::supplier_contact::{self, ContactRole},
    errors::ServiceError,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Service for managing supplier contact persons
#[derive(Clone)]
pub struct SupplierContactService {
    db_pool: Arc<DbPool>,
}

impl SupplierContactService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Lists all contacts of a supplier, ordered by role then first name
    #[instrument(skip(self))]
    pub async fn get_contacts_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<Vec<SupplierContactResponse>, ServiceError> {
        let db = &*self.db_pool;
        let contacts = supplier_contact::Entity::find()
            .filter(supplier_contact::Column::SupplierId.eq(supplier_id))
            .order_by_asc(supplier_contact::Column::Role)
            .order_by_asc(supplier_contact::Column::FirstName)
            .all(db)
            .await
            .map_err(|e| {
                error!(
                    "Failed to list contacts for supplier {}: {}",
                    supplier_id, e
                );
                ServiceError::db_error(e)
            })?;

        Ok(contacts.into_iter().map(Into::into).collect())
    }

    /// Gets a contact by ID
    #[instrument(skip(self))]
    pub async fn get_contact(
        &self,
        id: i32,
    ) -> Result<Option<SupplierContactResponse>, ServiceError> {
        let db = &*self.db_pool;
        let contact = supplier_contact::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch supplier contact {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        Ok(contact.map(Into::into))
    }

    /// Creates a new contact. Role defaults to Primary, `is_active` to
    /// true. The supplier FK is enforced by the engine.
    #[instrument(skip(self))]
    pub async fn create_contact(
        &self,
        request: CreateSupplierContactRequest,
    ) -> Result<SupplierContactResponse, ServiceError> {
        let db = &*self.db_pool;

        let model = supplier_contact::ActiveModel {
            supplier_id: Set(request.supplier_id),
            first_name: Set(request.first_name),
            last_name: Set(request.last_name),
            email: Set(request.email),
            phone: Set(request.phone),
            mobile: Set(request.mobile),
            job_title: Set(request.job_title),
            department: Set(request.department),
            role: Set(request.role.unwrap_or(ContactRole::Primary)),
            is_primary: Set(request.is_primary.unwrap_or(false)),
            is_active: Set(request.is_active.unwrap_or(true)),
            notes: Set(request.notes),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| {
            error!("Failed to create supplier contact: {}", e);
            ServiceError::db_error(e)
        })?;

        info!(
            contact_id = model.id,
            supplier_id = model.supplier_id,
            "Created supplier contact"
        );
        Ok(model.into())
    }

    /// Full replace of a contact's mutable fields. Returns `None` when
    /// the contact does not exist.
    #[instrument(skip(self))]
    pub async fn update_contact(
        &self,
        id: i32,
        request: UpdateSupplierContactRequest,
    ) -> Result<Option<SupplierContactResponse>, ServiceError> {
        let db = &*self.db_pool;

        let Some(existing) = supplier_contact::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| {
                error!("Failed to fetch supplier contact {}: {}", id, e);
                ServiceError::db_error(e)
            })?
        else {
            return Ok(None);
        };

        let mut active: supplier_contact::ActiveModel = existing.into();
        active.first_name = Set(request.first_name);
        active.last_name = Set(request.last_name);
        active.email = Set(request.email);
        active.phone = Set(request.phone);
        active.mobile = Set(request.mobile);
        active.job_title = Set(request.job_title);
        active.department = Set(request.department);
        active.role = Set(request.role);
        active.is_primary = Set(request.is_primary);
        active.is_active = Set(request.is_active);
        active.notes = Set(request.notes);

        let updated = active.update(db).await.map_err(|e| {
            error!("Failed to update supplier contact {}: {}", id, e);
            ServiceError::db_error(e)
        })?;

        info!(contact_id = id, "Updated supplier contact");
        Ok(Some(updated.into()))
    }

    /// Hard-deletes a contact. Returns `false` when the contact does
    /// not exist.
    #[instrument(skip(self))]
    pub async fn delete_contact(&self, id: i32) -> Result<bool, ServiceError> {
        let db = &*self.db_pool;

        let result = supplier_contact::Entity::delete_by_id(id)
            .exec(db)
            .await
            .map_err(|e| {
                error!("Failed to delete supplier contact {}: {}", id, e);
                ServiceError::db_error(e)
            })?;

        if result.rows_affected > 0 {
            info!(contact_id = id, "Deleted supplier contact");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
