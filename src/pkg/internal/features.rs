use std::ops::Index;

use super::schema::PredictionRequest;

pub const FEATURE_COUNT: usize = 10;

/// Column order the forest was fitted on. Reordering this silently corrupts
/// every prediction.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "years_experience",
    "agreeableness",
    "conscientiousness",
    "openness",
    "extraversion",
    "neuroticism",
    "collaboration_score",
    "innovation_preference",
    "remote_preference",
    "job_type_encoded",
];

pub const TECHNICAL: &str = "technical";

/// `"technical"` is the only value encoded as 1; matching is exact and
/// case-sensitive.
pub fn encode_job_type(job_type: &str) -> f64 {
    if job_type == TECHNICAL { 1.0 } else { 0.0 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        FeatureVector(values)
    }

    pub fn zeros() -> Self {
        FeatureVector([0.0; FEATURE_COUNT])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<&PredictionRequest> for FeatureVector {
    fn from(req: &PredictionRequest) -> Self {
        FeatureVector([
            req.years_experience,
            req.agreeableness,
            req.conscientiousness,
            req.openness,
            req.extraversion,
            req.neuroticism,
            req.collaboration_score,
            req.innovation_preference,
            req.remote_preference,
            encode_job_type(&req.job_type_preference),
        ])
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Map, Value, json};

    use super::*;

    #[test]
    fn defaults_encode_to_zeros() {
        let v = FeatureVector::from(&PredictionRequest::default());
        assert_eq!(v, FeatureVector::zeros());
        assert_eq!(v[9], 0.0);
    }

    #[test]
    fn job_type_is_exact_match_only() {
        assert_eq!(encode_job_type("technical"), 1.0);
        for other in ["non-technical", "manager", "", "TECHNICAL", "Technical", " technical"] {
            assert_eq!(encode_job_type(other), 0.0, "{:?} should encode to 0", other);
        }
    }

    #[test]
    fn reference_candidate_encodes_in_training_order() {
        let req = PredictionRequest::from_payload(&json!({
            "years_experience": 4.3,
            "agreeableness": 4.5,
            "conscientiousness": 4.0,
            "openness": 4.0,
            "extraversion": 3.3,
            "neuroticism": 1.8,
            "collaboration_score": 3.8,
            "innovation_preference": 3,
            "remote_preference": 0,
            "job_type_preference": "non-technical"
        }))
        .unwrap();
        let v = FeatureVector::from(&req);
        assert_eq!(
            v.as_slice(),
            &[4.3, 4.5, 4.0, 4.0, 3.3, 1.8, 3.8, 3.0, 0.0, 0.0]
        );
    }

    #[test]
    fn names_line_up_with_values() {
        let v = FeatureVector::new([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let named: Vec<_> = v.named().collect();
        assert_eq!(named[0], ("years_experience", 0.0));
        assert_eq!(named[6], ("collaboration_score", 6.0));
        assert_eq!(named[9], ("job_type_encoded", 9.0));
    }

    proptest! {
        #[test]
        fn order_ignores_json_key_order(
            values in proptest::array::uniform9(-1000.0f64..1000.0),
            technical in any::<bool>(),
            key_order in Just((0..FEATURE_COUNT).collect::<Vec<_>>()).prop_shuffle(),
        ) {
            let job_type = if technical { "technical" } else { "non-technical" };
            let mut body = Map::new();
            for &i in &key_order {
                if i == 9 {
                    body.insert("job_type_preference".into(), json!(job_type));
                } else {
                    body.insert(FEATURE_NAMES[i].into(), json!(values[i]));
                }
            }
            let req = PredictionRequest::from_payload(&Value::Object(body)).unwrap();
            let v = FeatureVector::from(&req);
            for i in 0..9 {
                prop_assert_eq!(v[i], values[i]);
            }
            prop_assert_eq!(v[9], if technical { 1.0 } else { 0.0 });
        }

        #[test]
        fn arbitrary_job_types_never_encode_to_one(job_type in "\\PC*") {
            prop_assume!(job_type != TECHNICAL);
            prop_assert_eq!(encode_job_type(&job_type), 0.0);
        }
    }
}
