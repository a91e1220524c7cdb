use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use std::time::Duration;

use supplier_api::migrator::Migrator;

/// Fresh in-memory database with the full schema applied. Pinned to a
/// single pooled connection so the in-memory store survives between
/// acquires.
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1)
        .min_connections(1)
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite");

    Migrator::up(&db, None).await.expect("migrations failed");

    Arc::new(db)
}
