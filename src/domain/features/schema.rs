//! Feature schema and the alignment routine

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::record::AlignedRow;
use crate::domain::DomainError;

/// The ordered feature-name list captured at model-training time.
///
/// The downstream model is order-sensitive, so this list is the single source
/// of truth for both the width and the column order of every row it sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Build a schema, rejecting empty lists and duplicate names
    pub fn new(names: Vec<String>) -> Result<Self, DomainError> {
        if names.is_empty() {
            return Err(DomainError::schema("feature list is empty"));
        }

        let mut seen = HashMap::new();
        for name in &names {
            if seen.insert(name.as_str(), ()).is_some() {
                return Err(DomainError::schema(format!(
                    "duplicate feature name '{}'",
                    name
                )));
            }
        }

        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Reconcile a named record against this schema.
    ///
    /// Total and side-effect free: every schema feature missing from the
    /// record is filled with zero, the output order equals the schema order
    /// exactly, and record columns the schema does not name are dropped.
    pub fn align(&self, record: &[(String, f64)]) -> AlignedRow {
        let by_name: HashMap<&str, f64> = record
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();

        let values = self
            .names
            .iter()
            .map(|name| by_name.get(name.as_str()).copied().unwrap_or(0.0))
            .collect();

        AlignedRow::new(values)
    }
}

impl TryFrom<Vec<String>> for FeatureSchema {
    type Error = DomainError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Self {
        schema.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(names: &[&str]) -> FeatureSchema {
        FeatureSchema::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn record(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(n, v)| (n.to_string(), *v)).collect()
    }

    #[test]
    fn test_align_fills_missing_features_with_zero() {
        let schema = schema(&["a", "b", "c"]);
        let row = schema.align(&record(&[("a", 1.0), ("c", 3.0)]));

        assert_eq!(row.values(), &[1.0, 0.0, 3.0]);
    }

    #[test]
    fn test_align_forces_schema_order() {
        let schema = schema(&["a", "b", "c"]);
        let row = schema.align(&record(&[("c", 3.0), ("b", 2.0), ("a", 1.0)]));

        assert_eq!(row.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_align_drops_columns_not_in_schema() {
        let schema = schema(&["a"]);
        let row = schema.align(&record(&[("a", 1.0), ("extra", 99.0)]));

        assert_eq!(row.values(), &[1.0]);
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_align_empty_record_is_all_zeros() {
        let schema = schema(&["a", "b"]);
        let row = schema.align(&[]);

        assert_eq!(row.values(), &[0.0, 0.0]);
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let result = FeatureSchema::new(vec!["a".to_string(), "a".to_string()]);
        assert!(result.unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn test_schema_rejects_empty_list() {
        assert!(FeatureSchema::new(vec![]).is_err());
    }

    #[test]
    fn test_schema_deserializes_from_plain_name_list() {
        let schema: FeatureSchema = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(schema.names(), &["a".to_string(), "b".to_string()]);
    }
}
