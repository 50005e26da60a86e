//! Store Sales Prediction Service
//!
//! A web form over a pre-trained regression model: store attributes in,
//! predicted sales value out. Three pre-built artifacts (model, categorical
//! encoder, feature-name list) are loaded once per process; per request the
//! service one-hot encodes the categorical fields, aligns the record against
//! the expected feature schema, and dispatches to the model.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{ArtifactBundle, PredictorService};

/// Create the application state with default configuration
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state: load the three artifacts once and share
/// them read-only behind the predictor service
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let bundle = ArtifactBundle::load(&config.artifacts)?;
    let predictor = Arc::new(PredictorService::new(Arc::new(bundle)));

    Ok(AppState::new(predictor))
}
