use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::impl_audit_stamping;

/// Kind of address on file for a supplier
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AddressType {
    #[sea_orm(num_value = 1)]
    Headquarters,
    #[sea_orm(num_value = 2)]
    Billing,
    #[sea_orm(num_value = 3)]
    Shipping,
    /// Default address type
    #[sea_orm(num_value = 4)]
    Office,
    #[sea_orm(num_value = 5)]
    Warehouse,
}

/// Postal address of a supplier; removed together with the supplier
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub supplier_id: i32,

    pub r#type: AddressType,

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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Supplier,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl_audit_stamping!();
