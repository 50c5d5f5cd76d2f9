//! Ordinary least squares fit
//!
//! The intercept is fit by centering: features and targets are shifted to
//! zero mean, the 6×6 normal equations `(XᵀX) w = Xᵀy` are solved by Cholesky
//! factorisation, and the intercept is recovered as `ȳ − x̄·w`.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::error::EstimatorError;
use crate::estimator::dataset::SampleRow;
use crate::estimator::features::{HouseFeatures, FEATURE_COUNT, FEATURE_NAMES};

/// Anything that can turn validated features into a price
///
/// The form is written against this trait rather than the concrete fit.
pub trait PriceModel {
    fn predict(&self, features: &HouseFeatures) -> f64;
}

/// Linear model fitted once on the built-in sample set
#[derive(Debug, Clone, PartialEq)]
pub struct FittedEstimator {
    weights: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl FittedEstimator {
    /// Fit by least squares over `rows`
    pub fn fit(rows: &[SampleRow]) -> Result<Self, EstimatorError> {
        if rows.is_empty() {
            return Err(EstimatorError::EmptyDataset);
        }

        let encoded = rows
            .iter()
            .map(SampleRow::features)
            .collect::<Result<Vec<_>, _>>()?;

        let n = rows.len();
        let x = DMatrix::from_fn(n, FEATURE_COUNT, |r, c| encoded[r].to_array()[c]);
        let y = DVector::from_iterator(n, rows.iter().map(|row| row.price));

        let x_means: Vec<f64> = (0..FEATURE_COUNT).map(|c| x.column(c).mean()).collect();
        let y_mean = y.mean();

        let xc = DMatrix::from_fn(n, FEATURE_COUNT, |r, c| x[(r, c)] - x_means[c]);
        let yc = y.map(|v| v - y_mean);

        let gram = xc.transpose() * &xc;
        let rhs = xc.transpose() * &yc;

        let solution = gram
            .cholesky()
            .ok_or(EstimatorError::Singular)?
            .solve(&rhs);

        if solution.iter().any(|w| !w.is_finite()) {
            return Err(EstimatorError::Singular);
        }

        let mut weights = [0.0; FEATURE_COUNT];
        for (slot, w) in weights.iter_mut().zip(solution.iter()) {
            *slot = *w;
        }

        let intercept = y_mean
            - weights
                .iter()
                .zip(x_means.iter())
                .map(|(w, m)| w * m)
                .sum::<f64>();

        debug!(rows = n, intercept, ?weights, "Fitted linear model");

        Ok(Self { weights, intercept })
    }

    /// Intercept plus the dot product of weights and features
    pub fn predict(&self, features: &HouseFeatures) -> f64 {
        self.intercept
            + self
                .weights
                .iter()
                .zip(features.to_array().iter())
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Feature name and weight pairs, in column order
    pub fn coefficients(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.into_iter().zip(self.weights.iter().copied())
    }

    /// Prediction minus target for each row
    pub fn residuals(&self, rows: &[SampleRow]) -> Result<Vec<f64>, EstimatorError> {
        rows.iter()
            .map(|row| Ok(self.predict(&row.features()?) - row.price))
            .collect()
    }

    /// Coefficient of determination over `rows`
    pub fn r_squared(&self, rows: &[SampleRow]) -> Result<f64, EstimatorError> {
        if rows.is_empty() {
            return Err(EstimatorError::EmptyDataset);
        }

        let mean = rows.iter().map(|r| r.price).sum::<f64>() / rows.len() as f64;
        let ss_tot: f64 = rows.iter().map(|r| (r.price - mean).powi(2)).sum();
        let ss_res: f64 = self.residuals(rows)?.iter().map(|e| e.powi(2)).sum();

        if ss_tot == 0.0 {
            return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
        }

        Ok(1.0 - ss_res / ss_tot)
    }
}

impl PriceModel for FittedEstimator {
    fn predict(&self, features: &HouseFeatures) -> f64 {
        FittedEstimator::predict(self, features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::dataset::SAMPLE_ROWS;

    fn row(area: f64, bedrooms: u32, age: u32, price: f64) -> SampleRow {
        SampleRow {
            area,
            bedrooms,
            bathrooms: 1,
            location: "Budget",
            parking: "No",
            age,
            price,
        }
    }

    #[test]
    fn test_fit_rejects_empty_dataset() {
        assert!(matches!(
            FittedEstimator::fit(&[]),
            Err(EstimatorError::EmptyDataset)
        ));
    }

    #[test]
    fn test_fit_rejects_constant_columns() {
        // Bathrooms, location and parking never vary
        let rows = [
            row(1000.0, 2, 5, 1.0),
            row(1100.0, 3, 6, 2.0),
            row(1200.0, 4, 7, 3.0),
        ];
        assert!(matches!(
            FittedEstimator::fit(&rows),
            Err(EstimatorError::Singular)
        ));
    }

    #[test]
    fn test_fit_sample_rows() {
        let model = FittedEstimator::fit(&SAMPLE_ROWS).unwrap();

        let expected = [
            ("Area", 4227.272727),
            ("Bedrooms", 754545.454545),
            ("Bathrooms", 77272.727273),
            ("Location", 865909.090909),
            ("Parking", 834090.909091),
            ("Age", 172727.272727),
        ];
        for ((name, weight), (expected_name, expected_weight)) in
            model.coefficients().zip(expected.iter())
        {
            assert_eq!(name, *expected_name);
            assert!(
                (weight - expected_weight).abs() < expected_weight.abs() * 1e-6,
                "{}: {} vs {}",
                name,
                weight,
                expected_weight
            );
        }
        assert!((model.intercept() - (-3220454.545454)).abs() < 1.0);
    }

    #[test]
    fn test_r_squared_is_high_on_training_set() {
        let model = FittedEstimator::fit(&SAMPLE_ROWS).unwrap();
        let r2 = model.r_squared(&SAMPLE_ROWS).unwrap();
        assert!(r2 > 0.99 && r2 <= 1.0, "r2 = {}", r2);
    }

    #[test]
    fn test_predict_passes_negative_values_through() {
        let model = FittedEstimator::fit(&SAMPLE_ROWS).unwrap();
        let tiny = HouseFeatures {
            area: 0.0,
            bedrooms: 0,
            bathrooms: 0,
            location: 0,
            parking: 0,
            age: 0,
        };
        let price = model.predict(&tiny);
        assert!(price < 0.0);
        assert!((price - model.intercept()).abs() < 1e-6);
    }
}
