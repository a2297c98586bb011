pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod db;
pub(crate) mod repositories;
pub(crate) mod schemas;

#[cfg(test)]
mod test_support;

use axum::{extract::Request, ServiceExt};

use crate::core::{config::Settings, state::AppState, telemetry};

/// Boots the service and blocks until a shutdown signal has drained it.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let pool = db::init_pool(&settings).await?;
    db::run_migrations(&pool).await?;
    tracing::info!(
        max_connections = settings.database().max_connections,
        "Store connection established and migrations applied"
    );

    let state = AppState::new(settings, pool);
    let served = serve(state.clone()).await;

    state.db().close().await;
    tracing::info!("Store connection closed");

    served
}

async fn serve(state: AppState) -> anyhow::Result<()> {
    let settings = state.settings();
    let listener = tokio::net::TcpListener::bind(settings.server_addr()).await?;

    tracing::info!(
        host = settings.server_host(),
        port = settings.server_port(),
        environment = settings.runtime().environment.as_str(),
        "Quiz platform API listening"
    );

    let app = api::router::router(state.clone());
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(core::shutdown::shutdown_signal())
        .await?;
    Ok(())
}
