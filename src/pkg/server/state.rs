use std::sync::Arc;

use crate::{
    conf::settings,
    pkg::internal::predictor::{self, Predictor},
    prelude::Result,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>) -> AppState {
        AppState { predictor }
    }

    /// Loads the model artifact named by `MODEL_PATH`. Called once before
    /// the listener is bound; the handle is never swapped afterwards.
    pub fn from_settings() -> Result<AppState> {
        let predictor = predictor::load(&settings.model_path)?;
        Ok(AppState::new(predictor))
    }
}
