//! Model domain - the prediction capability contract and its concrete form

mod ensemble;
mod tree;

pub use ensemble::GradientBoostedEnsemble;
pub use tree::{Node, Tree};

use crate::domain::DomainError;

/// Capability contract of the pre-trained model artifact:
/// an aligned numeric row in, a scalar prediction out.
pub trait SalesModel: Send + Sync {
    /// Width of the rows this model was trained on
    fn num_features(&self) -> usize;

    /// Predict a scalar for one aligned row
    fn predict(&self, row: &[f64]) -> Result<f64, DomainError>;
}
