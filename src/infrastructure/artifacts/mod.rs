//! Artifact loading - the three pre-built files behind every prediction

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::ArtifactConfig;
use crate::domain::{DomainError, FeatureSchema, GradientBoostedEnsemble, OneHotEncoder, SalesModel};

/// The three artifacts loaded once per process and shared read-only:
/// serialized model, fitted categorical encoder, and the expected
/// feature-name list.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub model: GradientBoostedEnsemble,
    pub encoder: OneHotEncoder,
    pub schema: FeatureSchema,
}

impl ArtifactBundle {
    /// Load and cross-validate all three artifacts.
    ///
    /// A missing or malformed file aborts startup; there is no retry path.
    pub fn load(config: &ArtifactConfig) -> Result<Self, DomainError> {
        let model: GradientBoostedEnsemble = load_json(&config.model_path)?;
        let encoder: OneHotEncoder = load_json(&config.encoder_path)?;
        let schema: FeatureSchema = load_json(&config.feature_names_path)?;

        model.validate()?;

        if schema.len() != model.num_features() {
            return Err(DomainError::artifact(format!(
                "feature list has {} names but model expects {} features",
                schema.len(),
                model.num_features()
            )));
        }

        info!(
            trees = model.num_trees(),
            features = schema.len(),
            "Artifacts loaded"
        );

        Ok(Self {
            model,
            encoder,
            schema,
        })
    }
}

fn load_json<T: DeserializeOwned>(path: &str) -> Result<T, DomainError> {
    let file = File::open(Path::new(path))
        .map_err(|e| DomainError::artifact(format!("{}: {}", path, e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| DomainError::artifact(format!("{}: {}", path, e)))
}
