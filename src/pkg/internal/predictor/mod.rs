pub mod forest;

use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

use super::features::FeatureVector;
use crate::prelude::Result;

pub use forest::RandomForest;

/// A fitted binary classifier. Implementations are immutable once built and
/// are shared across request handlers without locking.
pub trait Predictor: Debug + Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<i64>;
}

pub fn load(path: impl AsRef<Path>) -> Result<Arc<dyn Predictor>> {
    let forest = RandomForest::from_file(path)?;
    Ok(Arc::new(forest))
}
