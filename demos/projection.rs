//! Projection example: run the default scenario and print the results.
//!
//! Run from the project root:
//!   cargo run --example projection

use investment_projector::visualization::{
    print_projection_chart, print_projection_summary, print_projection_table,
};
use investment_projector::{ParameterInputs, Projector};

fn main() {
    // $10,000 initial, 8% return, $6,000/yr growing 5%, 3% inflation, 50 years
    let inputs = ParameterInputs::default();

    let projector = match Projector::from_inputs(&inputs) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Projection failed: {e}");
            return;
        }
    };

    println!("\n=== Default Scenario ===");
    print_projection_chart(projector.records(), 72, 16);
    print_projection_table(projector.records());
    if let Some(summary) = projector.summary() {
        print_projection_summary(&summary);
    }

    // Same plan without inflation: present values equal nominal values
    println!("\n=== Without Inflation ===");
    let no_inflation = ParameterInputs {
        inflation_percent: 0.0,
        ..inputs
    };
    match Projector::from_inputs(&no_inflation) {
        Ok(p) => {
            if let Some(summary) = p.summary() {
                print_projection_summary(&summary);
            }
        }
        Err(e) => eprintln!("Projection failed: {e}"),
    }
}
