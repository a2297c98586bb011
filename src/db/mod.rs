pub(crate) mod models;
pub(crate) mod types;

use std::time::Duration;

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};
use tracing::log::LevelFilter;

use crate::core::config::Settings;

const SLOW_STATEMENT: Duration = Duration::from_millis(500);

/// Opens the store handle shared by every request for the life of the process.
pub(crate) async fn init_pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    let database = settings.database();
    let connect_options = database
        .connect_options
        .clone()
        .application_name("quiz-platform-api")
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT);

    PgPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(1)
        .acquire_timeout(database.acquire_timeout)
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await
}

/// Applies the embedded `migrations/` directory. Already-applied versions are skipped.
pub(crate) async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = sqlx::migrate!("./migrations");
    migrator.run(pool).await?;
    tracing::debug!(known = migrator.iter().count(), "Schema migrations up to date");
    Ok(())
}
