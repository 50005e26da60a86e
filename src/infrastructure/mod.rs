//! Infrastructure layer - artifact loading, prediction service, logging

pub mod artifacts;
pub mod logging;
pub mod predictor;

pub use artifacts::ArtifactBundle;
pub use predictor::{InputSchema, PredictorService};
