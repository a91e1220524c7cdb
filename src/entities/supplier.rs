use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::impl_audit_stamping;

/// Lifecycle status of a supplier. No transition graph is enforced; any
/// status may replace any other via update.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum SupplierStatus {
    #[sea_orm(num_value = 1)]
    Active,
    #[sea_orm(num_value = 2)]
    Inactive,
    /// Default for newly created suppliers
    #[sea_orm(num_value = 3)]
    Pending,
    #[sea_orm(num_value = 4)]
    Blocked,
    #[sea_orm(num_value = 5)]
    Terminated,
}

/// Supplier aggregate root
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Legal or trading name
    pub name: String,

    pub registration_number: Option<String>,

    pub tax_id: Option<String>,

    pub website: Option<String>,

    pub description: Option<String>,

    pub status: SupplierStatus,

    /// Nullable: the category FK is severed (set null) if the category
    /// row is ever hard-removed
    pub category_id: Option<i32>,

    pub country_id: Option<i32>,

    pub currency_id: Option<i32>,

    /// Typical lead time in days
    pub lead_time_days: Option<i32>,

    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub minimum_order_amount: Option<Decimal>,

    pub payment_terms: Option<String>,

    #[sea_orm(column_type = "Decimal(Some((18, 2)))", nullable)]
    pub credit_limit: Option<Decimal>,

    #[sea_orm(column_type = "Decimal(Some((3, 2)))", nullable)]
    pub quality_rating: Option<Decimal>,

    #[sea_orm(column_type = "Decimal(Some((3, 2)))", nullable)]
    pub delivery_rating: Option<Decimal>,

    #[sea_orm(column_type = "Decimal(Some((3, 2)))", nullable)]
    pub service_rating: Option<Decimal>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier_category::Entity",
        from = "Column::CategoryId",
        to = "super::supplier_category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(has_many = "super::supplier_contact::Entity")]
    Contacts,
    #[sea_orm(has_many = "super::supplier_address::Entity")]
    Addresses,
    #[sea_orm(has_many = "super::supplier_document::Entity")]
    Documents,
    #[sea_orm(has_many = "super::supplier_rating::Entity")]
    Ratings,
}

impl Related<super::supplier_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::supplier_contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contacts.def()
    }
}

impl Related<super::supplier_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl Related<super::supplier_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl Related<super::supplier_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl_audit_stamping!();
