use serde::Serialize;
use standard_error::{Interpolate, StandardError};

use crate::prelude::Result;

pub const CULTURE_FIT: &str = "Culture Fit";
pub const NOT_CULTURE_FIT: &str = "Not Culture Fit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub result: &'static str,
}

impl PredictionResult {
    /// Only 0 and 1 are labels a binary classifier may produce; anything
    /// else is reported as an internal error instead of being mislabeled.
    pub fn from_label(label: i64) -> Result<Self> {
        match label {
            1 => Ok(PredictionResult {
                prediction: 1,
                result: CULTURE_FIT,
            }),
            0 => Ok(PredictionResult {
                prediction: 0,
                result: NOT_CULTURE_FIT,
            }),
            other => {
                tracing::error!("predictor produced non-binary label {}", other);
                Err(StandardError::new("ERR-PREDICT-002").interpolate_err(other.to_string()))
            }
        }
    }
}
