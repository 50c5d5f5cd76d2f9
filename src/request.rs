//! Prediction requests and their validation
//!
//! A request carries the raw text of each form control. [`PredictionRequest::validate`]
//! checks the fields in a fixed order and stops at the first failure.

use serde::Serialize;

use crate::error::{InputError, InputField};
use crate::estimator::{EncodingTable, HouseFeatures, LOCATION, PARKING};

/// Raw form contents at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    pub area: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub age: String,
    /// Selected label, empty when nothing is selected
    pub location: String,
    /// Selected label, empty when nothing is selected
    pub parking: String,
}

impl PredictionRequest {
    /// Parse and encode every field
    pub fn validate(&self) -> Result<HouseFeatures, InputError> {
        let area = parse_area(&self.area)?;
        let bedrooms = parse_count(InputField::Bedrooms, &self.bedrooms)?;
        let bathrooms = parse_count(InputField::Bathrooms, &self.bathrooms)?;
        let age = parse_count(InputField::Age, &self.age)?;
        let location = encode_selection(InputField::Location, &LOCATION, &self.location)?;
        let parking = encode_selection(InputField::Parking, &PARKING, &self.parking)?;

        Ok(HouseFeatures {
            area,
            bedrooms,
            bathrooms,
            location,
            parking,
            age,
        })
    }
}

fn parse_area(raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidNumber {
            field: InputField::Area,
            expected: "a number",
            value: raw.to_string(),
        })
}

fn parse_count(field: InputField, raw: &str) -> Result<u32, InputError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            expected: "a whole number",
            value: raw.to_string(),
        })
}

fn encode_selection(
    field: InputField,
    table: &EncodingTable,
    label: &str,
) -> Result<u8, InputError> {
    if label.is_empty() {
        return Err(InputError::NoSelection { field });
    }

    table.encode(label).ok_or_else(|| InputError::UnknownOption {
        field,
        label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> PredictionRequest {
        PredictionRequest {
            area: "1200".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            age: "5".to_string(),
            location: "Standard".to_string(),
            parking: "Yes".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        let features = valid_request().validate().unwrap();
        assert_eq!(
            features,
            HouseFeatures {
                area: 1200.0,
                bedrooms: 3,
                bathrooms: 2,
                location: 1,
                parking: 1,
                age: 5,
            }
        );
    }

    #[test]
    fn test_whitespace_and_decimal_area() {
        let mut request = valid_request();
        request.area = " 1250.5 ".to_string();
        request.age = "\t7 ".to_string();
        let features = request.validate().unwrap();
        assert_eq!(features.area, 1250.5);
        assert_eq!(features.age, 7);
    }

    #[test]
    fn test_non_numeric_bedrooms() {
        let mut request = valid_request();
        request.bedrooms = "abc".to_string();
        assert_eq!(
            request.validate(),
            Err(InputError::InvalidNumber {
                field: InputField::Bedrooms,
                expected: "a whole number",
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_fractional_count_rejected() {
        let mut request = valid_request();
        request.bathrooms = "2.5".to_string();
        assert_eq!(request.validate().unwrap_err().field(), Some(InputField::Bathrooms));
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut request = valid_request();
        request.age = "-1".to_string();
        assert_eq!(request.validate().unwrap_err().field(), Some(InputField::Age));
    }

    #[test]
    fn test_non_finite_area_rejected() {
        for raw in ["inf", "NaN", "", "  "] {
            let mut request = valid_request();
            request.area = raw.to_string();
            assert_eq!(request.validate().unwrap_err().field(), Some(InputField::Area));
        }
    }

    #[test]
    fn test_missing_selection() {
        let mut request = valid_request();
        request.location = String::new();
        assert_eq!(
            request.validate(),
            Err(InputError::NoSelection {
                field: InputField::Location
            })
        );
    }

    #[test]
    fn test_unknown_option() {
        let mut request = valid_request();
        request.parking = "Garage".to_string();
        assert_eq!(
            request.validate(),
            Err(InputError::UnknownOption {
                field: InputField::Parking,
                label: "Garage".to_string(),
            })
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let request = PredictionRequest::default();
        assert_eq!(request.validate().unwrap_err().field(), Some(InputField::Area));

        let mut request = valid_request();
        request.age = "old".to_string();
        request.location = String::new();
        assert_eq!(request.validate().unwrap_err().field(), Some(InputField::Age));
    }
}
