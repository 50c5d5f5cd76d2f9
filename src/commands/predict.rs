//! Predict command implementation
//!
//! Runs one request through the same validation and model as the form and
//! prints the result.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use house_price_estimator::{
    config::Config,
    error::{InputError, INPUT_ERROR_MESSAGE, INPUT_ERROR_TITLE},
    estimator::{FittedEstimator, PriceModel, SAMPLE_ROWS},
    format::{format_price, format_result},
    request::PredictionRequest,
};

/// Estimate a price from the command line
#[derive(Debug, Clone, Parser)]
pub struct PredictArgs {
    /// Area in square feet
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub area: String,

    /// Number of bedrooms
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub bedrooms: String,

    /// Number of bathrooms
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub bathrooms: String,

    /// Location tier (Budget, Standard, Premium)
    #[arg(long, default_value = "")]
    pub location: String,

    /// Parking (No, Yes)
    #[arg(long, default_value = "")]
    pub parking: String,

    /// Age of the property in years
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub age: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    fn request(&self) -> PredictionRequest {
        PredictionRequest {
            area: self.area.clone(),
            bedrooms: self.bedrooms.clone(),
            bathrooms: self.bathrooms.clone(),
            age: self.age.clone(),
            location: self.location.clone(),
            parking: self.parking.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PredictionOutput {
    price: f64,
    formatted: String,
}

/// Execute the predict command
pub fn execute(args: PredictArgs, cfg: &Config) -> Result<()> {
    let estimator = FittedEstimator::fit(&SAMPLE_ROWS)?;

    let output = estimate(&estimator, &args.request(), &cfg.display.currency_symbol)
        .map_err(|e| {
            eprintln!(
                "{} {}",
                format!("{}:", INPUT_ERROR_TITLE).red().bold(),
                INPUT_ERROR_MESSAGE
            );
            anyhow::Error::new(e)
        })?;

    info!(price = output.price, "Estimated house price");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}",
            format_result(&cfg.display.currency_symbol, output.price).green().bold()
        );
    }

    Ok(())
}

fn estimate<M: PriceModel>(
    model: &M,
    request: &PredictionRequest,
    currency_symbol: &str,
) -> Result<PredictionOutput, InputError> {
    let features = request.validate()?;
    let price = model.predict(&features);
    if !price.is_finite() {
        return Err(InputError::NonFiniteEstimate);
    }

    Ok(PredictionOutput {
        price,
        formatted: format_price(currency_symbol, price),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use house_price_estimator::error::InputField;

    fn args() -> PredictArgs {
        PredictArgs {
            area: "1500".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            location: "Premium".to_string(),
            parking: "Yes".to_string(),
            age: "5".to_string(),
            json: false,
        }
    }

    #[test]
    fn test_estimate() {
        let estimator = FittedEstimator::fit(&SAMPLE_ROWS).unwrap();
        let output = estimate(&estimator, &args().request(), "₹").unwrap();

        assert!((output.price - 8968181.818).abs() < 1.0);
        assert_eq!(output.formatted, "₹8,968,181");
    }

    #[test]
    fn test_estimate_rejects_bad_input() {
        let estimator = FittedEstimator::fit(&SAMPLE_ROWS).unwrap();
        let mut bad = args();
        bad.location = String::new();

        let err = estimate(&estimator, &bad.request(), "₹").unwrap_err();
        assert_eq!(err.field(), Some(InputField::Location));
    }

    #[test]
    fn test_estimate_rejects_overflow() {
        let estimator = FittedEstimator::fit(&SAMPLE_ROWS).unwrap();
        let mut huge = args();
        huge.area = "1e308".to_string();

        let err = estimate(&estimator, &huge.request(), "₹").unwrap_err();
        assert_eq!(err, InputError::NonFiniteEstimate);
    }

    #[test]
    fn test_output_json_shape() {
        let estimator = FittedEstimator::fit(&SAMPLE_ROWS).unwrap();
        let output = estimate(&estimator, &args().request(), "$").unwrap();
        let value = serde_json::to_value(&output).unwrap();

        assert!(value["price"].is_f64());
        assert_eq!(value["formatted"], "$8,968,181");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
