mod common;

use std::time::Duration;

use supplier_api::{
    dto::{CreateSupplierContactRequest, CreateSupplierRequest, UpdateSupplierContactRequest},
    entities::supplier_contact::ContactRole,
    errors::ServiceError,
    services::{SupplierContactService, SupplierService},
};

async fn seed_supplier(db: &std::sync::Arc<sea_orm::DatabaseConnection>) -> i32 {
    SupplierService::new(db.clone())
        .create_supplier(CreateSupplierRequest {
            name: "Contact Host".to_string(),
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
        })
        .await
        .unwrap()
        .id
}

fn contact_request(supplier_id: i32, first: &str, role: Option<ContactRole>) -> CreateSupplierContactRequest {
    CreateSupplierContactRequest {
        supplier_id,
        first_name: first.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: None,
        mobile: None,
        job_title: None,
        department: None,
        role,
        is_primary: None,
        is_active: None,
        notes: None,
    }
}

#[tokio::test]
async fn create_applies_role_and_activity_defaults() {
    let db = common::setup_db().await;
    let supplier_id = seed_supplier(&db).await;
    let service = SupplierContactService::new(db);

    let contact = service
        .create_contact(contact_request(supplier_id, "Dana", None))
        .await
        .unwrap();

    assert_eq!(contact.role, ContactRole::Primary);
    assert!(contact.is_active);
    assert!(!contact.is_primary);
    assert_eq!(contact.created_at, contact.updated_at);
}

#[tokio::test]
async fn listing_orders_by_role_then_first_name() {
    let db = common::setup_db().await;
    let supplier_id = seed_supplier(&db).await;
    let service = SupplierContactService::new(db);

    service
        .create_contact(contact_request(supplier_id, "Zoe", Some(ContactRole::Technical)))
        .await
        .unwrap();
    service
        .create_contact(contact_request(supplier_id, "Carl", Some(ContactRole::Procurement)))
        .await
        .unwrap();
    service
        .create_contact(contact_request(supplier_id, "Abby", Some(ContactRole::Procurement)))
        .await
        .unwrap();

    let contacts = service.get_contacts_by_supplier(supplier_id).await.unwrap();
    let names: Vec<&str> = contacts.iter().map(|c| c.first_name.as_str()).collect();

    assert_eq!(names, vec!["Abby", "Carl", "Zoe"]);
}

#[tokio::test]
async fn update_replaces_fields_and_advances_updated_at() {
    let db = common::setup_db().await;
    let supplier_id = seed_supplier(&db).await;
    let service = SupplierContactService::new(db);

    let created = service
        .create_contact(contact_request(supplier_id, "Erin", None))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;

    let updated = service
        .update_contact(
            created.id,
            UpdateSupplierContactRequest {
                first_name: "Erin".to_string(),
                last_name: "Promoted".to_string(),
                email: "erin@example.com".to_string(),
                phone: Some("555-0101".to_string()),
                mobile: None,
                job_title: Some("Head of Purchasing".to_string()),
                department: None,
                role: ContactRole::Finance,
                is_primary: true,
                is_active: true,
                notes: None,
            },
        )
        .await
        .unwrap()
        .expect("contact should exist");

    assert_eq!(updated.last_name, "Promoted");
    assert_eq!(updated.role, ContactRole::Finance);
    assert!(updated.is_primary);
    assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
async fn update_missing_contact_returns_none() {
    let db = common::setup_db().await;
    let service = SupplierContactService::new(db);

    let result = service
        .update_contact(
            555,
            UpdateSupplierContactRequest {
                first_name: "No".to_string(),
                last_name: "One".to_string(),
                email: "no.one@example.com".to_string(),
                phone: None,
                mobile: None,
                job_title: None,
                department: None,
                role: ContactRole::Primary,
                is_primary: false,
                is_active: true,
                notes: None,
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn delete_is_hard_with_sentinel_for_missing_rows() {
    let db = common::setup_db().await;
    let supplier_id = seed_supplier(&db).await;
    let service = SupplierContactService::new(db);

    let contact = service
        .create_contact(contact_request(supplier_id, "Finn", None))
        .await
        .unwrap();

    assert!(service.delete_contact(contact.id).await.unwrap());
    assert!(service.get_contact(contact.id).await.unwrap().is_none());
    assert!(!service.delete_contact(contact.id).await.unwrap());
}

#[tokio::test]
async fn orphan_contact_insert_is_rejected_by_engine() {
    let db = common::setup_db().await;
    let service = SupplierContactService::new(db);

    let err = service
        .create_contact(contact_request(987654, "Ghost", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::ConstraintViolation(_)));
}
