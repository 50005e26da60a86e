//! One-hot encoder loaded from the fitted encoder artifact

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Fitted categories for a single categorical column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderColumn {
    pub name: String,
    pub categories: Vec<String>,
}

/// One-hot encoder with the category vocabulary captured at training time.
///
/// `transform` maps each categorical column to one indicator column per
/// fitted category; `feature_names_out` reports those columns in the same
/// `{column}_{category}` form the training pipeline used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OneHotEncoder {
    columns: Vec<EncoderColumn>,
}

impl OneHotEncoder {
    pub fn new(columns: Vec<EncoderColumn>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[EncoderColumn] {
        &self.columns
    }

    /// Ordered indicator column names produced by `transform`
    pub fn feature_names_out(&self) -> Vec<String> {
        self.columns
            .iter()
            .flat_map(|column| {
                column
                    .categories
                    .iter()
                    .map(move |category| format!("{}_{}", column.name, category))
            })
            .collect()
    }

    /// Encode the categorical columns of a record into named indicator values.
    ///
    /// Errors if a fitted column is absent from the input or a value is
    /// outside the fitted vocabulary.
    pub fn transform(
        &self,
        values: &[(String, String)],
    ) -> Result<Vec<(String, f64)>, DomainError> {
        let mut encoded = Vec::new();

        for column in &self.columns {
            let value = values
                .iter()
                .find(|(name, _)| *name == column.name)
                .map(|(_, value)| value.as_str())
                .ok_or_else(|| {
                    DomainError::encoding(format!("missing categorical column '{}'", column.name))
                })?;

            if !column.categories.iter().any(|c| c == value) {
                return Err(DomainError::encoding(format!(
                    "unknown category '{}' for column '{}'",
                    value, column.name
                )));
            }

            for category in &column.categories {
                let indicator = if category == value { 1.0 } else { 0.0 };
                encoded.push((format!("{}_{}", column.name, category), indicator));
            }
        }

        Ok(encoded)
    }
}
