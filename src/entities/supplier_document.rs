use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::impl_audit_stamping;

/// Classification of a supplier document
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum DocumentType {
    /// Default document type
    #[sea_orm(num_value = 1)]
    Contract,
    #[sea_orm(num_value = 2)]
    Certificate,
    #[sea_orm(num_value = 3)]
    Nda,
    #[sea_orm(num_value = 4)]
    QualityAssurance,
    #[sea_orm(num_value = 5)]
    Insurance,
    #[sea_orm(num_value = 6)]
    TaxDocument,
    #[sea_orm(num_value = 7)]
    ComplianceDocument,
    #[sea_orm(num_value = 8)]
    Specification,
}

/// Document attached to a supplier. The file body lives in an external
/// document store; `upload_service_file_id` is the reference into it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub supplier_id: i32,

    pub title: String,

    pub r#type: DocumentType,

    pub description: Option<String>,

    pub file_name: Option<String>,

    pub content_type: Option<String>,

    pub file_size: Option<i64>,

    pub upload_service_file_id: Option<String>,

    pub valid_from: Option<DateTime<Utc>>,

    pub valid_to: Option<DateTime<Utc>>,

    pub is_required: bool,

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
