use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        environment = ?config.environment,
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    let state = AppState::new(config);

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state));
    let app = router.merge(health_router(state.config.app));

    let cleanup = state.shutdown_cleanup();
    create_production_app(app, &state.config.server, cleanup)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
