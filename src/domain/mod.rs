//! Domain layer - core types and the feature-assembly logic

pub mod error;
pub mod features;
pub mod model;
pub mod request;

pub use error::DomainError;
pub use features::{AlignedRow, EncoderColumn, FeatureSchema, OneHotEncoder, RawRecord};
pub use model::{GradientBoostedEnsemble, Node, SalesModel, Tree};
pub use request::{LocationType, Prediction, PredictionRequest, RegionCode, StoreType};
