use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::impl_audit_stamping;

/// Supplier category entity
///
/// Categories soft-delete: rows are marked inactive rather than removed,
/// so existing suppliers keep their history.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Category name, unique across active and inactive rows
    pub name: String,

    pub description: Option<String>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::supplier::Entity")]
    Suppliers,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suppliers.def()
    }
}

impl_audit_stamping!();
