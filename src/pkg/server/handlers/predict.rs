use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use standard_error::{Interpolate, StandardError, Status};

use crate::{
    pkg::{
        internal::{features::FeatureVector, schema::PredictionRequest, verdict::PredictionResult},
        server::state::AppState,
    },
    prelude::Result,
};

/// Predict culture fit from personality traits and job preferences.
///
/// All fields are optional: numeric traits default to 0 and
/// `job_type_preference` to `"non-technical"`. Responds with
/// `{"prediction": 0|1, "result": "Culture Fit"|"Not Culture Fit"}`.
pub async fn predict(
    State(state): State<AppState>,
    payload: core::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResult>> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!("rejected prediction body: {}", e.body_text());
        StandardError::new("ERR-REQ-001")
            .code(StatusCode::UNPROCESSABLE_ENTITY)
            .interpolate_err(e.body_text())
    })?;
    let request = PredictionRequest::from_payload(&payload).map_err(|errs| {
        tracing::warn!("invalid prediction request: {}", &errs);
        StandardError::new("ERR-REQ-002")
            .code(StatusCode::UNPROCESSABLE_ENTITY)
            .interpolate_err(errs.to_string())
    })?;
    let features = FeatureVector::from(&request);
    tracing::debug!("features: {:?}", features.named().collect::<Vec<_>>());
    let label = state
        .predictor
        .predict(&features)
        .map_err(|mut e| e.code(StatusCode::INTERNAL_SERVER_ERROR))?;
    let result =
        PredictionResult::from_label(label).map_err(|mut e| e.code(StatusCode::INTERNAL_SERVER_ERROR))?;
    tracing::info!("prediction: {} ({})", result.prediction, result.result);
    Ok(Json(result))
}
