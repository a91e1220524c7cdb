//! Entity definitions for the six supplier master-data tables.
//!
//! Audit stamping lives here as a single interception point: every
//! ActiveModel gets its `before_save` hook from [`impl_audit_stamping`],
//! so `created_at`/`updated_at` are maintained on the commit path and
//! callers cannot bypass them.

pub mod supplier;
pub mod supplier_address;
pub mod supplier_category;
pub mod supplier_contact;
pub mod supplier_document;
pub mod supplier_rating;

/// Implements `ActiveModelBehavior` with audit-field stamping for an
/// entity module's `ActiveModel`.
///
/// On insert both timestamps are set from one `Utc::now()` reading, so a
/// freshly created row always satisfies `created_at == updated_at`. On
/// update only `updated_at` moves.
macro_rules! impl_audit_stamping {
    () => {
        #[async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(
                mut self,
                _db: &C,
                insert: bool,
            ) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let now = chrono::Utc::now();
                if insert {
                    self.created_at = sea_orm::ActiveValue::Set(now);
                }
                self.updated_at = sea_orm::ActiveValue::Set(now);
                Ok(self)
            }
        }
    };
}

pub(crate) use impl_audit_stamping;
