//! Prediction request/response DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{LocationType, PredictionRequest, RegionCode, StoreType};

/// Body of POST /v1/predict.
///
/// The enum fields make out-of-vocabulary categories unrepresentable; only
/// the store identifier needs an explicit range check.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(min = 1, max = 365))]
    pub store_id: u32,
    pub store_type: StoreType,
    pub location_type: LocationType,
    pub region_code: RegionCode,
    pub holiday: bool,
    pub discount: bool,
    pub date: NaiveDate,
}

impl PredictRequest {
    pub fn into_domain(self) -> PredictionRequest {
        PredictionRequest {
            store_id: self.store_id,
            store_type: self.store_type,
            location_type: self.location_type,
            region_code: self.region_code,
            holiday: self.holiday,
            discount: self.discount,
            date: self.date,
        }
    }
}

/// Body of the prediction response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_sales: f64,
}
