use serde::Serialize;

/// Number of model inputs
pub const FEATURE_COUNT: usize = 6;

/// Column names, in the order of [`HouseFeatures::to_array`]
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["Area", "Bedrooms", "Bathrooms", "Location", "Parking", "Age"];

/// Fully validated, encoded model input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseFeatures {
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub location: u8,
    pub parking: u8,
    pub age: u32,
}

impl HouseFeatures {
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.area,
            f64::from(self.bedrooms),
            f64::from(self.bathrooms),
            f64::from(self.location),
            f64::from(self.parking),
            f64::from(self.age),
        ]
    }
}
