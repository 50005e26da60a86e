//! Regression tree representation used by the serialized model artifact

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A node in a regression tree.
///
/// Split nodes route on `feature < threshold`; NaN feature values follow the
/// recorded default direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: u32,
        threshold: f64,
        default_left: bool,
        left: u32,
        right: u32,
    },
    Leaf {
        value: f64,
    },
}

impl Node {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// A single regression tree, nodes stored flat with index-based children
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Check node and feature indices against the declared feature count
    pub fn validate(&self, num_features: usize) -> Result<(), DomainError> {
        if self.nodes.is_empty() {
            return Err(DomainError::artifact("tree has no nodes"));
        }

        for node in &self.nodes {
            if let Node::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature as usize >= num_features {
                    return Err(DomainError::artifact(format!(
                        "split references feature {} but model has {} features",
                        feature, num_features
                    )));
                }
                if *left as usize >= self.nodes.len() || *right as usize >= self.nodes.len() {
                    return Err(DomainError::artifact(format!(
                        "split child index out of range ({}, {})",
                        left, right
                    )));
                }
            }
        }

        Ok(())
    }

    /// Walk the tree for one row and return the leaf value.
    ///
    /// The walk is bounded by the node count so a malformed artifact with a
    /// cycle produces an error instead of a hang.
    pub fn predict(&self, row: &[f64]) -> Result<f64, DomainError> {
        let mut index = 0usize;

        for _ in 0..self.nodes.len() {
            match self
                .nodes
                .get(index)
                .ok_or_else(|| DomainError::internal(format!("node index {} out of range", index)))?
            {
                Node::Leaf { value } => return Ok(*value),
                Node::Split {
                    feature,
                    threshold,
                    default_left,
                    left,
                    right,
                } => {
                    let value = row.get(*feature as usize).copied().ok_or_else(|| {
                        DomainError::internal(format!(
                            "row has no value for feature {}",
                            feature
                        ))
                    })?;

                    let go_left = if value.is_nan() {
                        *default_left
                    } else {
                        value < *threshold
                    };
                    index = if go_left { *left as usize } else { *right as usize };
                }
            }
        }

        Err(DomainError::internal("tree walk did not reach a leaf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(feature: u32, threshold: f64, left: u32, right: u32) -> Node {
        Node::Split {
            feature,
            threshold,
            default_left: true,
            left,
            right,
        }
    }

    fn stump() -> Tree {
        Tree::new(vec![
            split(0, 0.5, 1, 2),
            Node::Leaf { value: -1.0 },
            Node::Leaf { value: 1.0 },
        ])
    }

    #[test]
    fn test_predict_routes_on_threshold() {
        let tree = stump();
        assert_eq!(tree.predict(&[0.0]).unwrap(), -1.0);
        assert_eq!(tree.predict(&[1.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_predict_threshold_is_exclusive() {
        // feature == threshold goes right
        assert_eq!(stump().predict(&[0.5]).unwrap(), 1.0);
    }

    #[test]
    fn test_predict_nan_follows_default_direction() {
        assert_eq!(stump().predict(&[f64::NAN]).unwrap(), -1.0);
    }

    #[test]
    fn test_predict_missing_feature_errors() {
        let tree = Tree::new(vec![
            split(3, 0.5, 1, 2),
            Node::Leaf { value: 0.0 },
            Node::Leaf { value: 0.0 },
        ]);
        assert!(tree.predict(&[1.0]).is_err());
    }

    #[test]
    fn test_predict_detects_cycle() {
        // Node 0 points back to itself
        let tree = Tree::new(vec![split(0, 0.5, 0, 0)]);
        let err = tree.predict(&[1.0]).unwrap_err();
        assert!(err.to_string().contains("did not reach a leaf"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_feature() {
        let tree = stump();
        assert!(tree.validate(1).is_ok());
        let err = Tree::new(vec![
            split(5, 0.5, 1, 2),
            Node::Leaf { value: 0.0 },
            Node::Leaf { value: 0.0 },
        ])
        .validate(3)
        .unwrap_err();
        assert!(err.to_string().contains("feature 5"));
    }

    #[test]
    fn test_validate_rejects_bad_child_index() {
        let tree = Tree::new(vec![split(0, 0.5, 1, 9)]);
        assert!(tree.validate(1).is_err());
    }

    #[test]
    fn test_node_deserializes_from_artifact_shape() {
        let json = r#"{"split":{"feature":2,"threshold":0.5,"default_left":true,"left":1,"right":2}}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert!(!node.is_leaf());

        let leaf: Node = serde_json::from_str(r#"{"leaf":{"value":3.25}}"#).unwrap();
        assert!(leaf.is_leaf());
    }
}
