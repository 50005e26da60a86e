//! Gradient-boosted tree ensemble - the model artifact's concrete form

use serde::{Deserialize, Serialize};

use super::tree::Tree;
use super::SalesModel;
use crate::domain::DomainError;

/// A pre-trained gradient-boosted regression ensemble.
///
/// The prediction for a row is the base score plus the leaf contribution of
/// every tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostedEnsemble {
    base_score: f64,
    num_features: usize,
    trees: Vec<Tree>,
}

impl GradientBoostedEnsemble {
    pub fn new(base_score: f64, num_features: usize, trees: Vec<Tree>) -> Self {
        Self {
            base_score,
            num_features,
            trees,
        }
    }

    pub fn base_score(&self) -> f64 {
        self.base_score
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Validate the loaded artifact once, at load time
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.num_features == 0 {
            return Err(DomainError::artifact("model declares zero features"));
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.num_features)
                .map_err(|e| DomainError::artifact(format!("tree {}: {}", i, e)))?;
        }

        Ok(())
    }
}

impl SalesModel for GradientBoostedEnsemble {
    fn num_features(&self) -> usize {
        self.num_features
    }

    fn predict(&self, row: &[f64]) -> Result<f64, DomainError> {
        if row.len() != self.num_features {
            return Err(DomainError::internal(format!(
                "row has {} values but model expects {}",
                row.len(),
                self.num_features
            )));
        }

        let mut score = self.base_score;
        for tree in &self.trees {
            score += tree.predict(row)?;
        }

        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tree::Node;
    use super::*;

    fn stump(feature: u32, threshold: f64, left: f64, right: f64) -> Tree {
        Tree::new(vec![
            Node::Split {
                feature,
                threshold,
                default_left: true,
                left: 1,
                right: 2,
            },
            Node::Leaf { value: left },
            Node::Leaf { value: right },
        ])
    }

    fn ensemble() -> GradientBoostedEnsemble {
        GradientBoostedEnsemble::new(
            100.0,
            2,
            vec![stump(0, 0.5, -10.0, 10.0), stump(1, 2.0, 1.0, 2.0)],
        )
    }

    #[test]
    fn test_predict_sums_base_score_and_leaves() {
        let model = ensemble();
        assert_eq!(model.predict(&[0.0, 0.0]).unwrap(), 91.0);
        assert_eq!(model.predict(&[1.0, 5.0]).unwrap(), 112.0);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model = ensemble();
        let a = model.predict(&[1.0, 1.0]).unwrap();
        let b = model.predict(&[1.0, 1.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let err = ensemble().predict(&[1.0]).unwrap_err();
        assert!(err.to_string().contains("expects 2"));
    }

    #[test]
    fn test_validate_catches_feature_out_of_range() {
        let model = GradientBoostedEnsemble::new(0.0, 1, vec![stump(7, 0.5, 0.0, 0.0)]);
        let err = model.validate().unwrap_err();
        assert!(err.to_string().contains("tree 0"));
    }

    #[test]
    fn test_validate_rejects_zero_features() {
        let model = GradientBoostedEnsemble::new(0.0, 0, vec![]);
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_ensemble_deserializes_from_artifact_shape() {
        let json = r#"{
            "base_score": 50.0,
            "num_features": 1,
            "trees": [[
                {"split": {"feature": 0, "threshold": 1.0, "default_left": false, "left": 1, "right": 2}},
                {"leaf": {"value": -5.0}},
                {"leaf": {"value": 5.0}}
            ]]
        }"#;

        let model: GradientBoostedEnsemble = serde_json::from_str(json).unwrap();
        assert!(model.validate().is_ok());
        assert_eq!(model.predict(&[0.0]).unwrap(), 45.0);
    }
}
