use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::impl_audit_stamping;

/// Periodic performance review of a supplier.
///
/// All six ratings are stored exactly as submitted; the overall rating is
/// never recomputed from the sub-ratings on the server side.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub supplier_id: i32,

    /// Review period label, e.g. "2025-Q3"
    pub rating_period: String,

    pub rating_date: DateTime<Utc>,

    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub quality_rating: Decimal,

    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub delivery_rating: Decimal,

    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub service_rating: Decimal,

    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub pricing_rating: Decimal,

    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub communication_rating: Decimal,

    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub overall_rating: Decimal,

    pub total_orders: Option<i32>,

    pub on_time_deliveries: Option<i32>,

    pub quality_issues: Option<i32>,

    pub comments: Option<String>,

    pub reviewed_by: Option<String>,

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
