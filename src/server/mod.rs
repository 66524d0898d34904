//! HTTP surface: the `POST /predict` endpoint.
//!
//! A long-lived process serving unboundedly many requests. The scoring
//! artifact is loaded exactly once, before the listening socket accepts
//! connections; a failed load downgrades the process to a sticky
//! `ModelUnavailable` state instead of crashing it.

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::adapters::LinearScorer;
use crate::application::PredictionService;

/// Default listen address (all interfaces, fixed port).
pub const DEFAULT_ADDR: &str = "0.0.0.0:5001";

/// Environment variable overriding the listen address.
pub const ADDR_ENV: &str = "STROKESENSE_ADDR";

/// Process-lifetime server state, decided once at startup.
pub enum ServerState {
    /// Artifact loaded; requests run the normalize-and-score pipeline.
    Ready(PredictionService<LinearScorer>),

    /// Terminal: the artifact could not be loaded. Every request to the
    /// prediction route fails identically; the server never reloads.
    ModelUnavailable { message: String },
}

impl ServerState {
    /// Load the scoring artifact once and decide the process state.
    #[must_use]
    pub fn load(artifact_path: &Path) -> Self {
        match LinearScorer::load(artifact_path) {
            Ok(scorer) => Self::Ready(PredictionService::new(Arc::new(scorer))),
            Err(e) => {
                tracing::error!("Model unavailable, serving errors only: {e}");
                Self::ModelUnavailable {
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Successful prediction body.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(rename = "strokeRisk")]
    pub stroke_risk: f64,
}

/// Error body shared by the 400 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build the router. All cross-origin requests are permitted.
pub fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(predict))
        .layer(cors)
        .with_state(state)
}

/// `POST /predict`: one patient record in, one probability out.
///
/// The body is taken as a raw string so that unparsable JSON gets the same
/// `{"error": ...}` shape as every other failure.
async fn predict(State(state): State<Arc<ServerState>>, body: String) -> Response {
    let service = match state.as_ref() {
        ServerState::Ready(service) => service,
        ServerState::ModelUnavailable { message } => {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, message.clone());
        }
    };

    let raw: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, format!("Malformed input: {e}"));
        }
    };

    match service.predict_value(&raw) {
        Ok(prediction) => (
            StatusCode::OK,
            Json(PredictResponse {
                stroke_risk: prediction.stroke_risk,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Prediction failed: {e}");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
