use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

pub const DEFAULT_JOB_TYPE: &str = "non-technical";

/// Candidate traits and preferences accepted by `/predict`.
///
/// Every field is optional on the wire: numeric traits default to `0.0`,
/// `job_type_preference` to `"non-technical"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub years_experience: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub openness: f64,
    pub extraversion: f64,
    pub neuroticism: f64,
    pub collaboration_score: f64,
    pub innovation_preference: f64,
    pub remote_preference: f64,
    pub job_type_preference: String,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        PredictionRequest {
            years_experience: 0.0,
            agreeableness: 0.0,
            conscientiousness: 0.0,
            openness: 0.0,
            extraversion: 0.0,
            neuroticism: 0.0,
            collaboration_score: 0.0,
            innovation_preference: 0.0,
            remote_preference: 0.0,
            job_type_preference: DEFAULT_JOB_TYPE.into(),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_error(expected: &'static str, got: &Value) -> ValidationError {
    let mut err = ValidationError::new("type")
        .with_message(Cow::Owned(format!("expected {}, got {}", expected, kind_of(got))));
    err.add_param(Cow::Borrowed("expected"), &expected);
    err
}

fn number(body: &Map<String, Value>, field: &'static str, errors: &mut ValidationErrors) -> f64 {
    match body.get(field) {
        None => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(value @ Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                errors.add(field, type_error("a number", value));
                0.0
            }
        },
        Some(other) => {
            errors.add(field, type_error("a number", other));
            0.0
        }
    }
}

fn text(
    body: &Map<String, Value>,
    field: &'static str,
    default: &str,
    errors: &mut ValidationErrors,
) -> String {
    match body.get(field) {
        None => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            errors.add(field, type_error("a string", other));
            default.to_string()
        }
    }
}

impl PredictionRequest {
    /// Validates a raw JSON body, applying defaults for absent fields.
    ///
    /// Numeric fields also take booleans (as 0/1) and strings that parse as
    /// numbers. Every offending field is reported, not only the first one.
    /// Keys that are not part of the schema are ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Value::Object(body) = payload else {
            errors.add("__all__", type_error("an object", payload));
            return Err(errors);
        };
        let request = PredictionRequest {
            years_experience: number(body, "years_experience", &mut errors),
            agreeableness: number(body, "agreeableness", &mut errors),
            conscientiousness: number(body, "conscientiousness", &mut errors),
            openness: number(body, "openness", &mut errors),
            extraversion: number(body, "extraversion", &mut errors),
            neuroticism: number(body, "neuroticism", &mut errors),
            collaboration_score: number(body, "collaboration_score", &mut errors),
            innovation_preference: number(body, "innovation_preference", &mut errors),
            remote_preference: number(body, "remote_preference", &mut errors),
            job_type_preference: text(body, "job_type_preference", DEFAULT_JOB_TYPE, &mut errors),
        };
        if errors.is_empty() {
            Ok(request)
        } else {
            Err(errors)
        }
    }
}
