mod common;

use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use std::time::Duration;

use supplier_api::{
    dto::{CreateSupplierCategoryRequest, CreateSupplierRequest, UpdateSupplierRequest},
    entities::{
        supplier::SupplierStatus,
        supplier_address::{self, AddressType},
        supplier_contact,
        supplier_document::{self, DocumentType},
        supplier_rating,
    },
    services::{suppliers::SupplierListQuery, SupplierCategoryService, SupplierService},
};

fn supplier_request(name: &str) -> CreateSupplierRequest {
    CreateSupplierRequest {
        name: name.to_string(),
        registration_number: None,
        tax_id: None,
        website: None,
        description: None,
        status: None,
        category_id: None,
        country_id: None,
        currency_id: None,
        lead_time_days: None,
        minimum_order_amount: None,
        payment_terms: None,
        credit_limit: None,
        quality_rating: None,
        delivery_rating: None,
        service_rating: None,
    }
}

fn list_query(page: u64, page_size: u64) -> SupplierListQuery {
    SupplierListQuery {
        page,
        page_size,
        search: None,
        status: None,
        category_id: None,
    }
}

#[tokio::test]
async fn create_defaults_status_to_pending_with_equal_audit_stamps() {
    let db = common::setup_db().await;
    let service = SupplierService::new(db);

    let supplier = service.create_supplier(supplier_request("Acme")).await.unwrap();

    assert_eq!(supplier.status, SupplierStatus::Pending);
    assert_eq!(supplier.created_at, supplier.updated_at);
    assert!(supplier.quality_rating.is_none());
}

#[tokio::test]
async fn get_missing_supplier_returns_none() {
    let db = common::setup_db().await;
    let service = SupplierService::new(db);

    assert!(service.get_supplier(404).await.unwrap().is_none());
    assert!(!service.supplier_exists(404).await.unwrap());
}

#[tokio::test]
async fn pagination_splits_25_rows_into_20_and_5() {
    let db = common::setup_db().await;
    let service = SupplierService::new(db);

    for i in 0..25 {
        service
            .create_supplier(supplier_request(&format!("Supplier {:02}", i)))
            .await
            .unwrap();
    }

    let (page1, total) = service.get_suppliers(list_query(1, 20)).await.unwrap();
    assert_eq!(total, 25);
    assert_eq!(page1.len(), 20);

    let (page2, total) = service.get_suppliers(list_query(2, 20)).await.unwrap();
    assert_eq!(total, 25);
    assert_eq!(page2.len(), 5);

    // Name ordering carries across pages
    assert_eq!(page1[0].name, "Supplier 00");
    assert_eq!(page2[0].name, "Supplier 20");
}

#[tokio::test]
async fn search_matches_name_description_and_website() {
    let db = common::setup_db().await;
    let service = SupplierService::new(db);

    let mut by_name = supplier_request("Zephyr Metals");
    by_name.description = Some("sheet steel".to_string());
    service.create_supplier(by_name).await.unwrap();

    let mut by_description = supplier_request("Plain Supplier");
    by_description.description = Some("zephyr-grade alloys".to_string());
    service.create_supplier(by_description).await.unwrap();

    let mut by_website = supplier_request("Third Supplier");
    by_website.website = Some("https://zephyr.example.com".to_string());
    service.create_supplier(by_website).await.unwrap();

    service.create_supplier(supplier_request("Unrelated")).await.unwrap();

    let mut query = list_query(1, 20);
    query.search = Some("zephyr".to_string());
    let (rows, total) = service.get_suppliers(query).await.unwrap();

    assert_eq!(total, 3);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|s| s.name != "Unrelated"));
}

#[tokio::test]
async fn status_and_category_filters_are_exact() {
    let db = common::setup_db().await;
    let categories = SupplierCategoryService::new(db.clone());
    let service = SupplierService::new(db);

    let category = categories
        .create_category(CreateSupplierCategoryRequest {
            name: "Machining".to_string(),
            description: None,
            is_active: None,
        })
        .await
        .unwrap();

    let mut active = supplier_request("Active One");
    active.status = Some(SupplierStatus::Active);
    active.category_id = Some(category.id);
    service.create_supplier(active).await.unwrap();

    let mut pending = supplier_request("Pending One");
    pending.category_id = Some(category.id);
    service.create_supplier(pending).await.unwrap();

    service.create_supplier(supplier_request("Uncategorized")).await.unwrap();

    let mut by_status = list_query(1, 20);
    by_status.status = Some(SupplierStatus::Active);
    let (rows, total) = service.get_suppliers(by_status).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].name, "Active One");

    let mut by_category = list_query(1, 20);
    by_category.category_id = Some(category.id);
    let (rows, total) = service.get_suppliers(by_category).await.unwrap();
    assert_eq!(total, 2);
    assert!(rows.iter().all(|s| s.category_name.as_deref() == Some("Machining")));
}

#[tokio::test]
async fn update_replaces_scalars_and_advances_updated_at() {
    let db = common::setup_db().await;
    let service = SupplierService::new(db);

    let created = service.create_supplier(supplier_request("Old Name")).await.unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;

    let updated = service
        .update_supplier(
            created.id,
            UpdateSupplierRequest {
                name: "New Name".to_string(),
                registration_number: Some("REG-1".to_string()),
                tax_id: None,
                website: None,
                description: None,
                status: SupplierStatus::Active,
                category_id: None,
                country_id: None,
                currency_id: None,
                lead_time_days: Some(14),
                minimum_order_amount: Some(dec!(1000.00)),
                payment_terms: Some("NET30".to_string()),
                credit_limit: None,
                quality_rating: None,
                delivery_rating: None,
                service_rating: None,
            },
        )
        .await
        .unwrap()
        .expect("supplier should exist");

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.status, SupplierStatus::Active);
    assert_eq!(updated.minimum_order_amount, Some(dec!(1000.00)));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
async fn money_columns_round_trip_amounts() {
    let db = common::setup_db().await;
    let service = SupplierService::new(db);

    let mut request = supplier_request("Big Spender");
    request.minimum_order_amount = Some(dec!(125000.50));
    request.credit_limit = Some(dec!(98000000.00));
    let created = service.create_supplier(request).await.unwrap();

    assert_eq!(created.minimum_order_amount, Some(dec!(125000.50)));
    assert_eq!(created.credit_limit, Some(dec!(98000000.00)));
}

#[tokio::test]
async fn performance_ratings_follow_create_and_update_payloads() {
    let db = common::setup_db().await;
    let service = SupplierService::new(db);

    let mut request = supplier_request("Rated Co");
    request.quality_rating = Some(dec!(4.50));
    request.delivery_rating = Some(dec!(3.80));
    let created = service.create_supplier(request).await.unwrap();

    assert_eq!(created.quality_rating, Some(dec!(4.50)));
    assert_eq!(created.delivery_rating, Some(dec!(3.80)));
    assert!(created.service_rating.is_none());

    let updated = service
        .update_supplier(
            created.id,
            UpdateSupplierRequest {
                name: "Rated Co".to_string(),
                registration_number: None,
                tax_id: None,
                website: None,
                description: None,
                status: SupplierStatus::Active,
                category_id: None,
                country_id: None,
                currency_id: None,
                lead_time_days: None,
                minimum_order_amount: None,
                payment_terms: None,
                credit_limit: None,
                quality_rating: Some(dec!(3.25)),
                delivery_rating: None,
                service_rating: Some(dec!(4.00)),
            },
        )
        .await
        .unwrap()
        .expect("supplier should exist");

    assert_eq!(updated.quality_rating, Some(dec!(3.25)));
    // Full replace: a rating omitted from the payload is cleared
    assert_eq!(updated.delivery_rating, None);
    assert_eq!(updated.service_rating, Some(dec!(4.00)));
}

async fn seed_graph(db: &std::sync::Arc<sea_orm::DatabaseConnection>, supplier_id: i32) {
    supplier_contact::ActiveModel {
        supplier_id: Set(supplier_id),
        first_name: Set("Ada".to_string()),
        last_name: Set("Nguyen".to_string()),
        email: Set("ada@example.com".to_string()),
        role: Set(supplier_contact::ContactRole::Procurement),
        is_primary: Set(true),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(&**db)
    .await
    .unwrap();

    supplier_contact::ActiveModel {
        supplier_id: Set(supplier_id),
        first_name: Set("Ben".to_string()),
        last_name: Set("Okafor".to_string()),
        email: Set("ben@example.com".to_string()),
        role: Set(supplier_contact::ContactRole::Primary),
        is_active: Set(false),
        ..Default::default()
    }
    .insert(&**db)
    .await
    .unwrap();

    supplier_address::ActiveModel {
        supplier_id: Set(supplier_id),
        r#type: Set(AddressType::Headquarters),
        address_line1: Set("1 Main St".to_string()),
        city: Set("Springfield".to_string()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(&**db)
    .await
    .unwrap();

    supplier_document::ActiveModel {
        supplier_id: Set(supplier_id),
        title: Set("Master agreement".to_string()),
        r#type: Set(DocumentType::Contract),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(&**db)
    .await
    .unwrap();

    supplier_document::ActiveModel {
        supplier_id: Set(supplier_id),
        title: Set("Expired cert".to_string()),
        r#type: Set(DocumentType::Certificate),
        is_active: Set(false),
        ..Default::default()
    }
    .insert(&**db)
    .await
    .unwrap();

    supplier_rating::ActiveModel {
        supplier_id: Set(supplier_id),
        rating_period: Set("2025-Q2".to_string()),
        rating_date: Set(chrono::Utc::now()),
        quality_rating: Set(dec!(4.50)),
        delivery_rating: Set(dec!(4.00)),
        service_rating: Set(dec!(3.75)),
        pricing_rating: Set(dec!(4.25)),
        communication_rating: Set(dec!(5.00)),
        overall_rating: Set(dec!(4.30)),
        ..Default::default()
    }
    .insert(&**db)
    .await
    .unwrap();
}

#[tokio::test]
async fn detail_loads_graph_with_active_children_and_all_ratings() {
    let db = common::setup_db().await;
    let categories = SupplierCategoryService::new(db.clone());
    let service = SupplierService::new(db.clone());

    let category = categories
        .create_category(CreateSupplierCategoryRequest {
            name: "Fasteners".to_string(),
            description: None,
            is_active: None,
        })
        .await
        .unwrap();

    let mut request = supplier_request("Bolt Works");
    request.category_id = Some(category.id);
    let supplier = service.create_supplier(request).await.unwrap();

    seed_graph(&db, supplier.id).await;

    let detail = service.get_supplier(supplier.id).await.unwrap().unwrap();

    assert_eq!(detail.category.as_ref().map(|c| c.name.as_str()), Some("Fasteners"));
    assert_eq!(detail.supplier.category_name.as_deref(), Some("Fasteners"));

    // Inactive contact and document are filtered out
    assert_eq!(detail.contacts.len(), 1);
    assert_eq!(detail.contacts[0].first_name, "Ada");
    assert_eq!(detail.addresses.len(), 1);
    assert_eq!(detail.documents.len(), 1);
    assert_eq!(detail.documents[0].title, "Master agreement");

    // Ratings come back regardless of any flag
    assert_eq!(detail.ratings.len(), 1);
    assert_eq!(detail.ratings[0].overall_rating, dec!(4.30));
}

#[tokio::test]
async fn hard_delete_cascades_to_children() {
    let db = common::setup_db().await;
    let service = SupplierService::new(db.clone());

    let supplier = service.create_supplier(supplier_request("Doomed")).await.unwrap();
    seed_graph(&db, supplier.id).await;

    assert!(service.delete_supplier(supplier.id).await.unwrap());
    assert!(service.get_supplier(supplier.id).await.unwrap().is_none());

    let orphan_contacts = supplier_contact::Entity::find()
        .filter(supplier_contact::Column::SupplierId.eq(supplier.id))
        .all(&*db)
        .await
        .unwrap();
    assert!(orphan_contacts.is_empty());

    let orphan_addresses = supplier_address::Entity::find()
        .filter(supplier_address::Column::SupplierId.eq(supplier.id))
        .all(&*db)
        .await
        .unwrap();
    assert!(orphan_addresses.is_empty());

    let orphan_documents = supplier_document::Entity::find()
        .filter(supplier_document::Column::SupplierId.eq(supplier.id))
        .all(&*db)
        .await
        .unwrap();
    assert!(orphan_documents.is_empty());

    let orphan_ratings = supplier_rating::Entity::find()
        .filter(supplier_rating::Column::SupplierId.eq(supplier.id))
        .all(&*db)
        .await
        .unwrap();
    assert!(orphan_ratings.is_empty());
}

#[tokio::test]
async fn delete_missing_supplier_returns_false() {
    let db = common::setup_db().await;
    let service = SupplierService::new(db);

    assert!(!service.delete_supplier(31337).await.unwrap());
}
