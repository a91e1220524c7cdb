use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::supplier_rating;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRatingResponse {
    pub id: i32,
    pub supplier_id: i32,
    pub rating_period: String,
    pub rating_date: DateTime<Utc>,
    pub quality_rating: Decimal,
    pub delivery_rating: Decimal,
    pub service_rating: Decimal,
    pub pricing_rating: Decimal,
    pub communication_rating: Decimal,
    pub overall_rating: Decimal,
    pub total_orders: Option<i32>,
    pub on_time_deliveries: Option<i32>,
    pub quality_issues: Option<i32>,
    pub comments: Option<String>,
    pub reviewed_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<supplier_rating::Model> for SupplierRatingResponse {
    fn from(model: supplier_rating::Model) -> Self {
        Self {
            id: model.id,
            supplier_id: model.supplier_id,
            rating_period: model.rating_period,
            rating_date: model.rating_date,
            quality_rating: model.quality_rating,
            delivery_rating: model.delivery_rating,
            service_rating: model.service_rating,
            pricing_rating: model.pricing_rating,
            communication_rating: model.communication_rating,
            overall_rating: model.overall_rating,
            total_orders: model.total_orders,
            on_time_deliveries: model.on_time_deliveries,
            quality_issues: model.quality_issues,
            comments: model.comments,
            reviewed_by: model.reviewed_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
