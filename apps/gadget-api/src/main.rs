use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let state = AppState::new(config, mongo_client);

    api::init_indexes(&state.db).await?;

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router.merge(health_router(state.config.app.clone()));

    let server = state.config.server.clone();
    let client = state.mongo_client.clone();

    info!(
        "Starting Gadget24 API with graceful shutdown ({:?} timeout)",
        server.shutdown_timeout
    );

    create_production_app(app, &server, server.shutdown_timeout, async move {
        info!("Shutting down: closing MongoDB connections");
        client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .wrap_err("Server error")?;

    info!("Gadget24 API shutdown complete");
    Ok(())
}
