//! Interactive estimator form
//!
//! This module provides the terminal form: its controls, the application
//! state with key handling and submission, and the ratatui rendering.

pub mod app;
pub mod input;
pub mod ui;

// Re-export commonly used types
pub use app::{Control, FormApp, SubmitOutcome};
pub use input::{Selector, TextField};
