//! Model command implementation
//!
//! Prints the fitted coefficients and, optionally, the training residuals.

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::info;

use house_price_estimator::{
    estimator::{FittedEstimator, SampleRow, SAMPLE_ROWS},
    format::format_price,
};

/// Execute the model command
pub fn execute(residuals: bool) -> Result<()> {
    info!(rows = SAMPLE_ROWS.len(), "Fitting estimator");
    let estimator = FittedEstimator::fit(&SAMPLE_ROWS)?;

    println!("{}", "Linear model (ordinary least squares)".green().bold());
    println!("{}", coefficient_table(&estimator));
    println!(
        "  {}: {:.4}",
        "R² (training set)".cyan(),
        estimator.r_squared(&SAMPLE_ROWS)?
    );

    if residuals {
        println!();
        println!("{}", "Training residuals:".bold());
        println!("{}", residual_table(&estimator, &SAMPLE_ROWS)?);
    }

    Ok(())
}

fn coefficient_table(estimator: &FittedEstimator) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("TERM").fg(Color::Cyan),
        Cell::new("WEIGHT").fg(Color::Cyan),
    ]);

    table.add_row(vec![
        Cell::new("(intercept)"),
        Cell::new(format!("{:.4}", estimator.intercept())).set_alignment(CellAlignment::Right),
    ]);
    for (name, weight) in estimator.coefficients() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.4}", weight)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

fn residual_table(estimator: &FittedEstimator, rows: &[SampleRow]) -> Result<Table> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("AREA").fg(Color::Cyan),
        Cell::new("BED").fg(Color::Cyan),
        Cell::new("BATH").fg(Color::Cyan),
        Cell::new("LOCATION").fg(Color::Cyan),
        Cell::new("PARKING").fg(Color::Cyan),
        Cell::new("AGE").fg(Color::Cyan),
        Cell::new("ACTUAL").fg(Color::Cyan),
        Cell::new("PREDICTED").fg(Color::Cyan),
        Cell::new("RESIDUAL").fg(Color::Cyan),
    ]);

    let residuals = estimator.residuals(rows)?;
    for (row, residual) in rows.iter().zip(residuals) {
        table.add_row(vec![
            Cell::new(row.area),
            Cell::new(row.bedrooms),
            Cell::new(row.bathrooms),
            Cell::new(row.location),
            Cell::new(row.parking),
            Cell::new(row.age),
            Cell::new(format_price("", row.price)),
            Cell::new(format_price("", row.price + residual)),
            Cell::new(format!("{:+.0}", residual)),
        ]);
    }

    Ok(table)
}
