/// Integration tests for fitting and prediction on the built-in sample set
use house_price_estimator::{
    estimator::{FittedEstimator, HouseFeatures, LOCATION, PARKING, SAMPLE_ROWS},
    request::PredictionRequest,
};

fn fitted() -> FittedEstimator {
    FittedEstimator::fit(&SAMPLE_ROWS).expect("sample set should fit")
}

#[test]
fn test_in_sample_predictions_are_finite() {
    let model = fitted();

    for row in SAMPLE_ROWS.iter() {
        let features = row.features().unwrap();
        let prediction = model.predict(&features);
        let residual = prediction - row.price;

        assert!(prediction.is_finite(), "non-finite prediction for {:?}", row);
        assert!(residual.is_finite(), "non-finite residual for {:?}", row);
    }
}

#[test]
fn test_first_training_row() {
    let model = fitted();

    let request = PredictionRequest {
        area: "1200".to_string(),
        bedrooms: "3".to_string(),
        bathrooms: "2".to_string(),
        age: "5".to_string(),
        location: "Standard".to_string(),
        parking: "Yes".to_string(),
    };
    let features = request.validate().unwrap();
    assert_eq!(features, SAMPLE_ROWS[0].features().unwrap());

    let prediction = model.predict(&features);
    assert!(prediction.is_finite());

    // Exact least-squares value for this row is 6,834,090.90...
    assert!(
        (prediction - 6_834_090.909).abs() < 1.0,
        "prediction = {}",
        prediction
    );

    let residual = model.residuals(&SAMPLE_ROWS).unwrap()[0];
    assert!((residual - (prediction - 6_800_000.0)).abs() < 1e-6);
}

#[test]
fn test_residuals_sum_to_zero() {
    // With an intercept, least-squares residuals are centered
    let model = fitted();
    let residuals = model.residuals(&SAMPLE_ROWS).unwrap();
    let sum: f64 = residuals.iter().sum();

    assert_eq!(residuals.len(), SAMPLE_ROWS.len());
    assert!(sum.abs() < 1e-3, "sum = {}", sum);
}

#[test]
fn test_prediction_is_deterministic() {
    let model = fitted();
    let features = SAMPLE_ROWS[4].features().unwrap();

    let first = model.predict(&features);
    for _ in 0..10 {
        assert_eq!(model.predict(&features), first);
    }

    // Refitting yields the same model
    assert_eq!(fitted(), model);
}

#[test]
fn test_location_tier_raises_price() {
    let model = fitted();
    let base = HouseFeatures {
        area: 1200.0,
        bedrooms: 3,
        bathrooms: 2,
        location: LOCATION.encode("Budget").unwrap(),
        parking: PARKING.encode("No").unwrap(),
        age: 5,
    };
    let premium = HouseFeatures {
        location: LOCATION.encode("Premium").unwrap(),
        ..base
    };

    assert!(model.predict(&premium) > model.predict(&base));
}

#[test]
fn test_out_of_distribution_input_passes_through() {
    let model = fitted();
    let shack = HouseFeatures {
        area: 10.0,
        bedrooms: 0,
        bathrooms: 0,
        location: 0,
        parking: 0,
        age: 0,
    };

    let price = model.predict(&shack);
    assert!(price.is_finite());
    assert!(price < 0.0);
}
