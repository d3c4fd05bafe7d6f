use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::retry_with_backoff;

/// Connect once with explicit pool options.
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect, retrying with exponential backoff and jitter.
///
/// The number of retries comes from `config.connect_retries`. This smooths
/// over the database container starting slower than the service.
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
) -> Result<DatabaseConnection, DbErr> {
    let retry_config = config.retry_config();
    let options = config.into_connect_options();

    retry_with_backoff("postgres connect", &retry_config, || {
        connect_with_options(options.clone())
    })
    .await
}

/// Applies all pending migrations of `M`.
///
/// # Example
/// ```ignore
/// run_migrations::<migration::Migrator>(&db, "catalog-api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
