//! Prediction request domain - the single transient entity of the service

mod entity;

pub use entity::{LocationType, Prediction, PredictionRequest, RegionCode, StoreType};
