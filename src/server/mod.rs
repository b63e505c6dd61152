pub mod handlers;
pub mod types;

use crate::{
    Result,
    analysis::Analyzer,
    config::Config,
    llm::{HuggingFaceClient, InferenceClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Builds the HTTP routes around an analyzer backed by `client`.
pub fn router(client: Arc<dyn InferenceClient>, model_name: &str) -> Router {
    let app_state = handlers::AppState {
        analyzer: Arc::new(Analyzer::new(client)),
        model_name: Arc::from(model_name),
    };

    Router::new()
        .route("/", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let model_name = config.inference.model_name().to_string();

    let client = HuggingFaceClient::new(config.inference.clone())?;
    if !client.has_token() {
        warn!("HF_API_TOKEN is not set, inference requests will be sent without authorization");
    }

    let app = router(Arc::new(client), &model_name);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {} (model: {})", addr, model_name);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
