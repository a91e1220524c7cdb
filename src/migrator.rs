use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250917_000001_create_supplier_categories_table::Migration),
            Box::new(m20250917_000002_create_suppliers_table::Migration),
            Box::new(m20250917_000003_create_supplier_contacts_table::Migration),
            Box::new(m20250917_000004_create_supplier_addresses_table::Migration),
            Box::new(m20250917_000005_create_supplier_documents_table::Migration),
            Box::new(m20250917_000006_create_supplier_ratings_table::Migration),
        ]
    }
}

// Migration implementations

mod m20250917_000001_create_supplier_categories_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250917_000001_create_supplier_categories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SupplierCategories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierCategories::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SupplierCategories::Name)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierCategories::Description)
                                .string_len(500)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierCategories::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(SupplierCategories::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierCategories::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            // Name is unique across active and inactive categories
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_categories_name")
                        .table(SupplierCategories::Table)
                        .col(SupplierCategories::Name)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_categories_is_active")
                        .table(SupplierCategories::Table)
                        .col(SupplierCategories::IsActive)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_categories_created_at")
                        .table(SupplierCategories::Table)
                        .col(SupplierCategories::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplierCategories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SupplierCategories {
        Table,
        Id,
        Name,
        Description,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250917_000002_create_suppliers_table {

    use sea_orm_migration::prelude::*;

    use super::m20250917_000001_create_supplier_categories_table::SupplierCategories;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250917_000002_create_suppliers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // sea-query's SQLite backend caps decimal precision at 16;
            // Postgres keeps the full 18-digit money columns.
            let money_precision = match manager.get_database_backend() {
                sea_orm::DbBackend::Sqlite => 16,
                _ => 18,
            };

            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Suppliers::Name).string_len(200).not_null())
                        .col(
                            ColumnDef::new(Suppliers::RegistrationNumber)
                                .string_len(100)
                                .null(),
                        )
                        .col(ColumnDef::new(Suppliers::TaxId).string_len(50).null())
                        .col(ColumnDef::new(Suppliers::Website).string_len(500).null())
                        .col(
                            ColumnDef::new(Suppliers::Description)
                                .string_len(1000)
                                .null(),
                        )
                        // 3 = Pending
                        .col(
                            ColumnDef::new(Suppliers::Status)
                                .integer()
                                .not_null()
                                .default(3),
                        )
                        .col(ColumnDef::new(Suppliers::CategoryId).integer().null())
                        .col(ColumnDef::new(Suppliers::CountryId).integer().null())
                        .col(ColumnDef::new(Suppliers::CurrencyId).integer().null())
                        .col(ColumnDef::new(Suppliers::LeadTimeDays).integer().null())
                        .col(
                            ColumnDef::new(Suppliers::MinimumOrderAmount)
                                .decimal_len(money_precision, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::PaymentTerms)
                                .string_len(50)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::CreditLimit)
                                .decimal_len(money_precision, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::QualityRating)
                                .decimal_len(3, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::DeliveryRating)
                                .decimal_len(3, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::ServiceRating)
                                .decimal_len(3, 2)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_suppliers_category_id")
                                .from(Suppliers::Table, Suppliers::CategoryId)
                                .to(SupplierCategories::Table, SupplierCategories::Id)
                                .on_delete(ForeignKeyAction::SetNull),
                        )
                        .to_owned(),
                )
                .await?;

            for (name, column) in [
                ("idx_suppliers_name", Suppliers::Name),
                (
                    "idx_suppliers_registration_number",
                    Suppliers::RegistrationNumber,
                ),
                ("idx_suppliers_tax_id", Suppliers::TaxId),
                ("idx_suppliers_status", Suppliers::Status),
                ("idx_suppliers_category_id", Suppliers::CategoryId),
                ("idx_suppliers_created_at", Suppliers::CreatedAt),
                ("idx_suppliers_updated_at", Suppliers::UpdatedAt),
            ] {
                manager
                    .create_index(
                        Index::create()
                            .if_not_exists()
                            .name(name)
                            .table(Suppliers::Table)
                            .col(column)
                            .to_owned(),
                    )
                    .await?;
            }

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Suppliers {
        Table,
        Id,
        Name,
        RegistrationNumber,
        TaxId,
        Website,
        Description,
        Status,
        CategoryId,
        CountryId,
        CurrencyId,
        LeadTimeDays,
        MinimumOrderAmount,
        PaymentTerms,
        CreditLimit,
        QualityRating,
        DeliveryRating,
        ServiceRating,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250917_000003_create_supplier_contacts_table {

    use sea_orm_migration::prelude::*;

    use super::m20250917_000002_create_suppliers_table::Suppliers;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250917_000003_create_supplier_contacts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SupplierContacts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierContacts::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::SupplierId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::FirstName)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::LastName)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::Email)
                                .string_len(254)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::Phone)
                                .string_len(20)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::Mobile)
                                .string_len(20)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::JobTitle)
                                .string_len(100)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::Department)
                                .string_len(100)
                                .null(),
                        )
                        // 1 = Primary
                        .col(
                            ColumnDef::new(SupplierContacts::Role)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::IsPrimary)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::Notes)
                                .string_len(500)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierContacts::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplier_contacts_supplier_id")
                                .from(SupplierContacts::Table, SupplierContacts::SupplierId)
                                .to(Suppliers::Table, Suppliers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            for (name, column) in [
                (
                    "idx_supplier_contacts_supplier_id",
                    SupplierContacts::SupplierId,
                ),
                ("idx_supplier_contacts_email", SupplierContacts::Email),
                ("idx_supplier_contacts_role", SupplierContacts::Role),
                (
                    "idx_supplier_contacts_is_primary",
                    SupplierContacts::IsPrimary,
                ),
                (
                    "idx_supplier_contacts_is_active",
                    SupplierContacts::IsActive,
                ),
                (
                    "idx_supplier_contacts_created_at",
                    SupplierContacts::CreatedAt,
                ),
            ] {
                manager
                    .create_index(
                        Index::create()
                            .if_not_exists()
                            .name(name)
                            .table(SupplierContacts::Table)
                            .col(column)
                            .to_owned(),
                    )
                    .await?;
            }

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_contacts_supplier_id_is_primary")
                        .table(SupplierContacts::Table)
                        .col(SupplierContacts::SupplierId)
                        .col(SupplierContacts::IsPrimary)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplierContacts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SupplierContacts {
        Table,
        Id,
        SupplierId,
        FirstName,
        LastName,
        Email,
        Phone,
        Mobile,
        JobTitle,
        Department,
        Role,
        IsPrimary,
        IsActive,
        Notes,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250917_000004_create_supplier_addresses_table {

    use sea_orm_migration::prelude::*;

    use super::m20250917_000002_create_suppliers_table::Suppliers;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250917_000004_create_supplier_addresses_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SupplierAddresses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierAddresses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::SupplierId)
                                .integer()
                                .not_null(),
                        )
                        // 4 = Office
                        .col(
                            ColumnDef::new(SupplierAddresses::Type)
                                .integer()
                                .not_null()
                                .default(4),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::Building)
                                .string_len(100)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::AddressLine1)
                                .string_len(200)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::AddressLine2)
                                .string_len(200)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::City)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::State)
                                .string_len(100)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::PostalCode)
                                .string_len(20)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::CountryId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::IsPrimary)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::Notes)
                                .string_len(500)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierAddresses::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplier_addresses_supplier_id")
                                .from(SupplierAddresses::Table, SupplierAddresses::SupplierId)
                                .to(Suppliers::Table, Suppliers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            for (name, column) in [
                (
                    "idx_supplier_addresses_supplier_id",
                    SupplierAddresses::SupplierId,
                ),
                ("idx_supplier_addresses_type", SupplierAddresses::Type),
                (
                    "idx_supplier_addresses_country_id",
                    SupplierAddresses::CountryId,
                ),
                (
                    "idx_supplier_addresses_is_primary",
                    SupplierAddresses::IsPrimary,
                ),
                (
                    "idx_supplier_addresses_is_active",
                    SupplierAddresses::IsActive,
                ),
                (
                    "idx_supplier_addresses_created_at",
                    SupplierAddresses::CreatedAt,
                ),
            ] {
                manager
                    .create_index(
                        Index::create()
                            .if_not_exists()
                            .name(name)
                            .table(SupplierAddresses::Table)
                            .col(column)
                            .to_owned(),
                    )
                    .await?;
            }

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_addresses_supplier_id_type")
                        .table(SupplierAddresses::Table)
                        .col(SupplierAddresses::SupplierId)
                        .col(SupplierAddresses::Type)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_addresses_supplier_id_is_primary")
                        .table(SupplierAddresses::Table)
                        .col(SupplierAddresses::SupplierId)
                        .col(SupplierAddresses::IsPrimary)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplierAddresses::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SupplierAddresses {
        Table,
        Id,
        SupplierId,
        Type,
        Building,
        AddressLine1,
        AddressLine2,
        City,
        State,
        PostalCode,
        CountryId,
        IsPrimary,
        IsActive,
        Notes,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250917_000005_create_supplier_documents_table {

    use sea_orm_migration::prelude::*;

    use super::m20250917_000002_create_suppliers_table::Suppliers;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250917_000005_create_supplier_documents_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SupplierDocuments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierDocuments::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::SupplierId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::Title)
                                .string_len(200)
                                .not_null(),
                        )
                        // 1 = Contract
                        .col(
                            ColumnDef::new(SupplierDocuments::Type)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::Description)
                                .string_len(500)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::FileName)
                                .string_len(200)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::ContentType)
                                .string_len(100)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::FileSize)
                                .big_integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::UploadServiceFileId)
                                .string_len(100)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::ValidFrom)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::ValidTo)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::IsRequired)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::Notes)
                                .string_len(500)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierDocuments::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplier_documents_supplier_id")
                                .from(SupplierDocuments::Table, SupplierDocuments::SupplierId)
                                .to(Suppliers::Table, Suppliers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            for (name, column) in [
                (
                    "idx_supplier_documents_supplier_id",
                    SupplierDocuments::SupplierId,
                ),
                ("idx_supplier_documents_type", SupplierDocuments::Type),
                (
                    "idx_supplier_documents_valid_from",
                    SupplierDocuments::ValidFrom,
                ),
                (
                    "idx_supplier_documents_valid_to",
                    SupplierDocuments::ValidTo,
                ),
                (
                    "idx_supplier_documents_is_required",
                    SupplierDocuments::IsRequired,
                ),
                (
                    "idx_supplier_documents_is_active",
                    SupplierDocuments::IsActive,
                ),
                (
                    "idx_supplier_documents_created_at",
                    SupplierDocuments::CreatedAt,
                ),
                (
                    "idx_supplier_documents_upload_service_file_id",
                    SupplierDocuments::UploadServiceFileId,
                ),
            ] {
                manager
                    .create_index(
                        Index::create()
                            .if_not_exists()
                            .name(name)
                            .table(SupplierDocuments::Table)
                            .col(column)
                            .to_owned(),
                    )
                    .await?;
            }

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_documents_supplier_id_type")
                        .table(SupplierDocuments::Table)
                        .col(SupplierDocuments::SupplierId)
                        .col(SupplierDocuments::Type)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_documents_supplier_id_is_required")
                        .table(SupplierDocuments::Table)
                        .col(SupplierDocuments::SupplierId)
                        .col(SupplierDocuments::IsRequired)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplierDocuments::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SupplierDocuments {
        Table,
        Id,
        SupplierId,
        Title,
        Type,
        Description,
        FileName,
        ContentType,
        FileSize,
        UploadServiceFileId,
        ValidFrom,
        ValidTo,
        IsRequired,
        IsActive,
        Notes,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250917_000006_create_supplier_ratings_table {

    use sea_orm_migration::prelude::*;

    use super::m20250917_000002_create_suppliers_table::Suppliers;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250917_000006_create_supplier_ratings_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SupplierRatings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierRatings::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::SupplierId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::RatingPeriod)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::RatingDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::QualityRating)
                                .decimal_len(3, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::DeliveryRating)
                                .decimal_len(3, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::ServiceRating)
                                .decimal_len(3, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::PricingRating)
                                .decimal_len(3, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::CommunicationRating)
                                .decimal_len(3, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::OverallRating)
                                .decimal_len(3, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::TotalOrders)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::OnTimeDeliveries)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::QualityIssues)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::Comments)
                                .string_len(1000)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::ReviewedBy)
                                .string_len(100)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierRatings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplier_ratings_supplier_id")
                                .from(SupplierRatings::Table, SupplierRatings::SupplierId)
                                .to(Suppliers::Table, Suppliers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            for (name, column) in [
                (
                    "idx_supplier_ratings_supplier_id",
                    SupplierRatings::SupplierId,
                ),
                (
                    "idx_supplier_ratings_rating_date",
                    SupplierRatings::RatingDate,
                ),
                (
                    "idx_supplier_ratings_rating_period",
                    SupplierRatings::RatingPeriod,
                ),
                (
                    "idx_supplier_ratings_overall_rating",
                    SupplierRatings::OverallRating,
                ),
                (
                    "idx_supplier_ratings_created_at",
                    SupplierRatings::CreatedAt,
                ),
            ] {
                manager
                    .create_index(
                        Index::create()
                            .if_not_exists()
                            .name(name)
                            .table(SupplierRatings::Table)
                            .col(column)
                            .to_owned(),
                    )
                    .await?;
            }

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_ratings_supplier_id_rating_date")
                        .table(SupplierRatings::Table)
                        .col(SupplierRatings::SupplierId)
                        .col(SupplierRatings::RatingDate)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_ratings_supplier_id_rating_period")
                        .table(SupplierRatings::Table)
                        .col(SupplierRatings::SupplierId)
                        .col(SupplierRatings::RatingPeriod)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplierRatings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SupplierRatings {
        Table,
        Id,
        SupplierId,
        RatingPeriod,
        RatingDate,
        QualityRating,
        DeliveryRating,
        ServiceRating,
        PricingRating,
        CommunicationRating,
        OverallRating,
        TotalOrders,
        OnTimeDeliveries,
        QualityIssues,
        Comments,
        ReviewedBy,
        CreatedAt,
        UpdatedAt,
    }
}
