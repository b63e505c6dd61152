use super::types::{AnalysisRequest, AnalysisResponse, ErrorResponse};
use crate::analysis::Analyzer;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub model_name: Arc<str>,
}

pub async fn health(State(state): State<AppState>) -> String {
    format!(
        "📖 DeepReader server is running! Model: {}",
        state.model_name
    )
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected analyze request body: {}", rejection.body_text());
        bad_request(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let text = request
        .trimmed_text()
        .ok_or_else(|| bad_request("No text provided"))?;

    info!("Received analyze request ({} chars)", text.chars().count());

    let analysis = state.analyzer.analyze(text).await;
    if let Some(reason) = analysis.fallback_reason() {
        info!("Responding with fallback analysis ({})", reason.label());
    }

    Ok(Json(AnalysisResponse {
        analyzed: analysis.into_text(),
    }))
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
