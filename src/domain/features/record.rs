//! Raw one-row records assembled from a prediction request

/// A named one-row record prior to encoding.
///
/// Numeric columns pass through alignment untouched; categorical columns are
/// consumed by the one-hot encoder.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    numeric: Vec<(String, f64)>,
    categorical: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_numeric(&mut self, name: impl Into<String>, value: f64) {
        self.numeric.push((name.into(), value));
    }

    pub fn push_categorical(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.categorical.push((name.into(), value.into()));
    }

    pub fn numeric_columns(&self) -> &[(String, f64)] {
        &self.numeric
    }

    pub fn categorical_columns(&self) -> &[(String, String)] {
        &self.categorical
    }

    /// Look up a numeric column by name
    pub fn numeric(&self, name: &str) -> Option<f64> {
        self.numeric
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Look up a categorical column by name
    pub fn categorical(&self, name: &str) -> Option<&str> {
        self.categorical
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A numeric row whose column order matches the feature schema exactly
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow {
    values: Vec<f64>,
}

impl AlignedRow {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lookups() {
        let mut record = RawRecord::new();
        record.push_numeric("Store_id", 42.0);
        record.push_categorical("Store_Type", "S1");

        assert_eq!(record.numeric("Store_id"), Some(42.0));
        assert_eq!(record.numeric("Missing"), None);
        assert_eq!(record.categorical("Store_Type"), Some("S1"));
        assert_eq!(record.categorical("Missing"), None);
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut record = RawRecord::new();
        record.push_numeric("b", 2.0);
        record.push_numeric("a", 1.0);

        let names: Vec<&str> = record
            .numeric_columns()
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
