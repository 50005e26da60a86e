//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, Prediction, PredictionRequest};
use crate::infrastructure::predictor::{InputSchema, PredictorService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn PredictorServiceTrait>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn PredictorServiceTrait>) -> Self {
        Self { predictor }
    }
}

/// Trait for predictor service operations
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PredictorServiceTrait: Send + Sync {
    /// Run the one-shot encode/align/predict routine for a single request
    async fn predict(&self, request: PredictionRequest) -> Result<Prediction, DomainError>;

    /// Input schema for the form widgets
    fn input_schema(&self) -> InputSchema;

    /// Probe prediction over the loaded artifacts
    fn verify(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl PredictorServiceTrait for PredictorService {
    async fn predict(&self, request: PredictionRequest) -> Result<Prediction, DomainError> {
        PredictorService::predict(self, &request)
    }

    fn input_schema(&self) -> InputSchema {
        PredictorService::input_schema(self)
    }

    fn verify(&self) -> Result<(), DomainError> {
        PredictorService::verify(self)
    }
}
