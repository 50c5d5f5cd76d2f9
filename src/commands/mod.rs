//! Command implementations for the CLI
//!
//! - form: Interactive estimator form (default)
//! - predict: One-shot estimate from command-line values
//! - model: Fitted coefficients and training residuals
//! - config: Configuration display and validation

pub mod config;
pub mod form;
pub mod model;
pub mod predict;
