pub mod handlers;
pub mod types;

use crate::{Error, Result, config::Config, inference::SageMakerClient};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub const DEMO_PATH: &str = "/demo";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(DEMO_PATH, post(handlers::demo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let target = config.endpoint_target().await?;
    info!(
        "Forwarding to SageMaker endpoint {} in {}",
        target.name, target.region
    );

    // Built once and shared by every request.
    info!("Connecting to Sagemaker client...");
    let client = SageMakerClient::connect(&target.region).await;
    info!("...connected to Sagemaker client!");

    let app_state = AppState::new(Arc::new(client), target.name);
    let app = router(app_state);

    if config.server.mode.runs_in_lambda() {
        info!("Starting Lambda runtime");
        return lambda_http::run(app)
            .await
            .map_err(|e| Error::Lambda(e.to_string()));
    }

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
