//! Predictor service - the one-shot encode/align/predict routine

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    DomainError, LocationType, Prediction, PredictionRequest, RegionCode, SalesModel, StoreType,
};
use crate::infrastructure::artifacts::ArtifactBundle;

/// Bounds of the store identifier widget
pub const STORE_ID_MIN: u32 = 1;
pub const STORE_ID_MAX: u32 = 365;

/// Input schema published to the form so its widgets match the enumerations
/// the model was trained on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSchema {
    pub store_id_min: u32,
    pub store_id_max: u32,
    pub store_types: Vec<String>,
    pub location_types: Vec<String>,
    pub region_codes: Vec<String>,
    pub feature_names: Vec<String>,
}

/// Stateless per-request predictor over the process-wide artifact bundle.
///
/// Per request: assemble the one-row record, one-hot encode the categorical
/// columns, align against the feature schema, and dispatch to the model.
#[derive(Clone)]
pub struct PredictorService {
    bundle: Arc<ArtifactBundle>,
}

impl PredictorService {
    pub fn new(bundle: Arc<ArtifactBundle>) -> Self {
        Self { bundle }
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<Prediction, DomainError> {
        let record = request.to_record();

        let mut columns: Vec<(String, f64)> = record.numeric_columns().to_vec();
        columns.extend(self.bundle.encoder.transform(record.categorical_columns())?);

        let row = self.bundle.schema.align(&columns);
        let sales = self.bundle.model.predict(row.values())?;

        debug!(
            store_id = request.store_id,
            store_type = %request.store_type,
            sales,
            "Prediction computed"
        );

        Ok(Prediction { sales })
    }

    pub fn input_schema(&self) -> InputSchema {
        InputSchema {
            store_id_min: STORE_ID_MIN,
            store_id_max: STORE_ID_MAX,
            store_types: StoreType::ALL.iter().map(|v| v.to_string()).collect(),
            location_types: LocationType::ALL.iter().map(|v| v.to_string()).collect(),
            region_codes: RegionCode::ALL.iter().map(|v| v.to_string()).collect(),
            feature_names: self.bundle.schema.names().to_vec(),
        }
    }

    /// Run a fixed probe request end to end, used by the readiness check
    pub fn verify(&self) -> Result<(), DomainError> {
        let probe = PredictionRequest {
            store_id: STORE_ID_MIN,
            store_type: StoreType::S1,
            location_type: LocationType::L1,
            region_code: RegionCode::R1,
            holiday: false,
            discount: false,
            date: NaiveDate::from_ymd_opt(2020, 1, 1)
                .ok_or_else(|| DomainError::internal("invalid probe date"))?,
        };

        self.predict(&probe).map(|_| ())
    }
}
