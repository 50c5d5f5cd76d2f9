use std::fmt;
use thiserror::Error;

/// Title of the dialog shown for any rejected submission
pub const INPUT_ERROR_TITLE: &str = "Input Error";

/// The one message shown for any rejected submission
pub const INPUT_ERROR_MESSAGE: &str = "Please fill all fields correctly (numbers + dropdowns).";

/// Form inputs, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Area,
    Bedrooms,
    Bathrooms,
    Age,
    Location,
    Parking,
}

impl InputField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::Bedrooms => "Bedrooms",
            Self::Bathrooms => "Bathrooms",
            Self::Age => "Age",
            Self::Location => "Location",
            Self::Parking => "Parking",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a prediction request was rejected
///
/// The form shows every variant the same way ([`INPUT_ERROR_MESSAGE`]); the
/// cause is kept for the command line and for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field} must be {expected}, got {value:?}")]
    InvalidNumber {
        field: InputField,
        expected: &'static str,
        value: String,
    },

    #[error("{field} has no selection")]
    NoSelection { field: InputField },

    #[error("{field} has no option {label:?}")]
    UnknownOption { field: InputField, label: String },

    /// The inputs parsed but the model's estimate overflowed
    #[error("estimate is not a finite number")]
    NonFiniteEstimate,
}

impl InputError {
    /// The control at fault, if the failure is tied to one
    pub fn field(&self) -> Option<InputField> {
        match self {
            Self::InvalidNumber { field, .. }
            | Self::NoSelection { field }
            | Self::UnknownOption { field, .. } => Some(*field),
            Self::NonFiniteEstimate => None,
        }
    }
}

/// Failures while fitting the model at startup
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("training set is empty")]
    EmptyDataset,

    #[error("unknown {feature} label in training data: {label:?}")]
    UnknownCategory { feature: &'static str, label: String },

    #[error("normal equations are singular; cannot fit coefficients")]
    Singular,
}
