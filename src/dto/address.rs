use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::supplier_address::{self, AddressType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierAddressResponse {
    pub id: i32,
    pub supplier_id: i32,
    #[serde(rename = "type")]
    pub address_type: AddressType,
    pub building: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country_id: Option<i32>,
    pub is_primary: bool,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<supplier_address::Model> for SupplierAddressResponse {
    fn from(model: supplier_address::Model) -> Self {
        Self {
            id: model.id,
            supplier_id: model.supplier_id,
            address_type: model.r#type,
            building: model.building,
            address_line1: model.address_line1,
            address_line2: model.address_line2,
            city: model.city,
            state: model.state,
            postal_code: model.postal_code,
            country_id: model.country_id,
            is_primary: model.is_primary,
            is_active: model.is_active,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
