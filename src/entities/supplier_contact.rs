use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::impl_audit_stamping;

/// Functional role of a contact within the supplier relationship
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ContactRole {
    #[sea_orm(num_value = 1)]
    Primary,
    #[sea_orm(num_value = 2)]
    Procurement,
    #[sea_orm(num_value = 3)]
    Technical,
    #[sea_orm(num_value = 4)]
    Finance,
}

/// Contact person at a supplier; removed together with the supplier
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
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
