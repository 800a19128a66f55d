use axum::{extract::State, http::StatusCode};
use standard_error::Status;

use crate::{
    pkg::{internal::features::FeatureVector, server::state::AppState},
    prelude::Result,
};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    state
        .predictor
        .predict(&FeatureVector::zeros())
        .map_err(|mut e| e.code(StatusCode::INTERNAL_SERVER_ERROR))?;
    tracing::debug!("service is healthy");
    Ok(())
}
