pub mod features;
pub mod predictor;
pub mod schema;
pub mod verdict;
