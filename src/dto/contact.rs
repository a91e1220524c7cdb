use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::supplier_contact::{self, ContactRole};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierContactResponse {
    pub id: i32,
    pub supplier_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub role: ContactRole,
    pub is_primary: bool,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<supplier_contact::Model> for SupplierContactResponse {
    fn from(model: supplier_contact::Model) -> Self {
        Self {
            id: model.id,
            supplier_id: model.supplier_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            mobile: model.mobile,
            job_title: model.job_title,
            department: model.department,
            role: model.role,
            is_primary: model.is_primary,
            is_active: model.is_active,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierContactRequest {
    pub supplier_id: i32,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email, length(max = 254))]
    pub email: String,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 20))]
    pub mobile: Option<String>,

    #[validate(length(max = 100))]
    pub job_title: Option<String>,

    #[validate(length(max = 100))]
    pub department: Option<String>,

    /// Defaults to Primary when omitted
    pub role: Option<ContactRole>,

    pub is_primary: Option<bool>,

    pub is_active: Option<bool>,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Full replacement of the mutable fields.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email, length(max = 254))]
    pub email: String,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 20))]
    pub mobile: Option<String>,

    #[validate(length(max = 100))]
    pub job_title: Option<String>,

    #[validate(length(max = 100))]
    pub department: Option<String>,

    pub role: ContactRole,

    pub is_primary: bool,

    pub is_active: bool,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}
