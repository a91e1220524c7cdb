use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{supplier, supplier_category};

use super::{
    SupplierAddressResponse, SupplierCategoryResponse, SupplierContactResponse,
    SupplierDocumentResponse, SupplierRatingResponse,
};
use crate::entities::supplier::SupplierStatus;

/// Flat supplier projection used by list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub id: i32,
    pub name: String,
    pub registration_number: Option<String>,
    pub tax_id: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub status: SupplierStatus,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub country_id: Option<i32>,
    pub currency_id: Option<i32>,
    pub lead_time_days: Option<i32>,
    pub minimum_order_amount: Option<Decimal>,
    pub payment_terms: Option<String>,
    pub credit_limit: Option<Decimal>,
    pub quality_rating: Option<Decimal>,
    pub delivery_rating: Option<Decimal>,
    pub service_rating: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<supplier::Model> for SupplierResponse {
    fn from(model: supplier::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            registration_number: model.registration_number,
            tax_id: model.tax_id,
            website: model.website,
            description: model.description,
            status: model.status,
            category_id: model.category_id,
            category_name: None,
            country_id: model.country_id,
            currency_id: model.currency_id,
            lead_time_days: model.lead_time_days,
            minimum_order_amount: model.minimum_order_amount,
            payment_terms: model.payment_terms,
            credit_limit: model.credit_limit,
            quality_rating: model.quality_rating,
            delivery_rating: model.delivery_rating,
            service_rating: model.service_rating,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<(supplier::Model, Option<supplier_category::Model>)> for SupplierResponse {
    fn from((model, category): (supplier::Model, Option<supplier_category::Model>)) -> Self {
        let mut response = SupplierResponse::from(model);
        response.category_name = category.map(|c| c.name);
        response
    }
}

/// Full supplier graph returned by the single-supplier endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDetailResponse {
    #[serde(flatten)]
    pub supplier: SupplierResponse,
    pub category: Option<SupplierCategoryResponse>,
    pub contacts: Vec<SupplierContactResponse>,
    pub addresses: Vec<SupplierAddressResponse>,
    pub documents: Vec<SupplierDocumentResponse>,
    pub ratings: Vec<SupplierRatingResponse>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 100))]
    pub registration_number: Option<String>,

    #[validate(length(max = 50))]
    pub tax_id: Option<String>,

    #[validate(length(max = 500))]
    pub website: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    /// Defaults to Pending when omitted
    pub status: Option<SupplierStatus>,

    pub category_id: Option<i32>,

    pub country_id: Option<i32>,

    pub currency_id: Option<i32>,

    pub lead_time_days: Option<i32>,

    pub minimum_order_amount: Option<Decimal>,

    #[validate(length(max = 50))]
    pub payment_terms: Option<String>,

    pub credit_limit: Option<Decimal>,

    pub quality_rating: Option<Decimal>,

    pub delivery_rating: Option<Decimal>,

    pub service_rating: Option<Decimal>,
}

/// Full replacement of the scalar fields.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 100))]
    pub registration_number: Option<String>,

    #[validate(length(max = 50))]
    pub tax_id: Option<String>,

    #[validate(length(max = 500))]
    pub website: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub status: SupplierStatus,

    pub category_id: Option<i32>,

    pub country_id: Option<i32>,

    pub currency_id: Option<i32>,

    pub lead_time_days: Option<i32>,

    pub minimum_order_amount: Option<Decimal>,

    #[validate(length(max = 50))]
    pub payment_terms: Option<String>,

    pub credit_limit: Option<Decimal>,

    pub quality_rating: Option<Decimal>,

    pub delivery_rating: Option<Decimal>,

    pub service_rating: Option<Decimal>,
}
