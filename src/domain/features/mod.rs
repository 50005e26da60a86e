//! Feature assembly - one-hot encoding and schema alignment

mod encoder;
mod record;
mod schema;

pub use encoder::{EncoderColumn, OneHotEncoder};
pub use record::{AlignedRow, RawRecord};
pub use schema::FeatureSchema;
