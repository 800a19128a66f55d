use std::path::Path;

use serde_json::Value;
use standard_error::{Interpolate, StandardError};

use crate::{
    conf::settings,
    pkg::internal::{
        features::FeatureVector,
        predictor::{Predictor, RandomForest},
        schema::PredictionRequest,
        verdict::PredictionResult,
    },
    prelude::Result,
};

pub async fn run(payload: Option<&Path>) -> Result<()> {
    let forest = RandomForest::from_file(&settings.model_path)?;
    println!(
        "{}: {} trees, classes {:?}",
        settings.model_path,
        forest.n_trees(),
        forest.classes()
    );
    let Some(path) = payload else {
        return Ok(());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StandardError::new("ERR-CLI-001").interpolate_err(e.to_string()))?;
    let body: Value = serde_json::from_str(&raw)
        .map_err(|e| StandardError::new("ERR-REQ-001").interpolate_err(e.to_string()))?;
    let request = PredictionRequest::from_payload(&body)
        .map_err(|e| StandardError::new("ERR-REQ-002").interpolate_err(e.to_string()))?;
    println!("request: {}", serde_json::to_string(&request)?);
    let features = FeatureVector::from(&request);
    for (name, value) in features.named() {
        println!("  {:<22} {}", name, value);
    }
    println!("  probabilities          {:?}", forest.predict_proba(&features));
    let result = PredictionResult::from_label(forest.predict(&features)?)?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
