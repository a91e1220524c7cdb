use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::supplier_document::{self, DocumentType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDocumentResponse {
    pub id: i32,
    pub supplier_id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
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

impl From<supplier_document::Model> for SupplierDocumentResponse {
    fn from(model: supplier_document::Model) -> Self {
        Self {
            id: model.id,
            supplier_id: model.supplier_id,
            title: model.title,
            document_type: model.r#type,
            description: model.description,
            file_name: model.file_name,
            content_type: model.content_type,
            file_size: model.file_size,
            upload_service_file_id: model.upload_service_file_id,
            valid_from: model.valid_from,
            valid_to: model.valid_to,
            is_required: model.is_required,
            is_active: model.is_active,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
