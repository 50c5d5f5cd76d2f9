//! Price estimator
//!
//! A linear model fit once on the built-in sample set, plus the encoding
//! tables that turn categorical labels into model inputs.

pub mod dataset;
pub mod encoding;
pub mod features;
pub mod model;

// Re-export commonly used types
pub use dataset::{SampleRow, SAMPLE_ROWS};
pub use encoding::{EncodingTable, LOCATION, PARKING};
pub use features::{HouseFeatures, FEATURE_COUNT, FEATURE_NAMES};
pub use model::{FittedEstimator, PriceModel};
