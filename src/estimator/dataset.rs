//! Built-in training set
//!
//! Nine sample houses, embedded as constants. The model is fit on these once
//! at startup; nothing else feeds it.

use crate::error::EstimatorError;
use crate::estimator::encoding::{EncodingTable, LOCATION, PARKING};
use crate::estimator::features::HouseFeatures;

/// One labelled training example with raw categorical labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub location: &'static str,
    pub parking: &'static str,
    pub age: u32,
    pub price: f64,
}

impl SampleRow {
    const fn new(
        area: f64,
        bedrooms: u32,
        bathrooms: u32,
        location: &'static str,
        parking: &'static str,
        age: u32,
        price: f64,
    ) -> Self {
        Self {
            area,
            bedrooms,
            bathrooms,
            location,
            parking,
            age,
            price,
        }
    }

    /// Encode the categorical labels through the shared tables
    pub fn features(&self) -> Result<HouseFeatures, EstimatorError> {
        Ok(HouseFeatures {
            area: self.area,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            location: encode_label(&LOCATION, self.location)?,
            parking: encode_label(&PARKING, self.parking)?,
            age: self.age,
        })
    }
}

fn encode_label(table: &EncodingTable, label: &str) -> Result<u8, EstimatorError> {
    table
        .encode(label)
        .ok_or_else(|| EstimatorError::UnknownCategory {
            feature: table.feature(),
            label: label.to_string(),
        })
}

pub static SAMPLE_ROWS: [SampleRow; 9] = [
    SampleRow::new(1200.0, 3, 2, "Standard", "Yes", 5, 6_800_000.0),
    SampleRow::new(800.0, 2, 1, "Budget", "No", 10, 3_500_000.0),
    SampleRow::new(1600.0, 4, 3, "Premium", "Yes", 2, 9_500_000.0),
    SampleRow::new(1000.0, 2, 2, "Standard", "No", 8, 5_000_000.0),
    SampleRow::new(1400.0, 3, 2, "Premium", "Yes", 3, 8_200_000.0),
    SampleRow::new(1800.0, 4, 3, "Premium", "Yes", 1, 10_500_000.0),
    SampleRow::new(1100.0, 2, 1, "Budget", "No", 7, 4_200_000.0),
    SampleRow::new(950.0, 1, 1, "Budget", "No", 9, 3_100_000.0),
    SampleRow::new(1300.0, 3, 2, "Standard", "Yes", 4, 7_200_000.0),
];
