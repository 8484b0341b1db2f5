use serde::{Deserialize, Serialize};

use crate::models::YearRecord;

/// Headline figures for a completed projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub final_year: i32,
    pub final_age: u32,
    pub final_balance: f64,
    /// Final balance in year-0 dollars
    pub final_pv_balance: f64,
    pub total_deposits: f64,
    pub total_interest: f64,
    /// Final balance divided by total deposits (0 when nothing was deposited)
    pub growth_multiple: f64,
    /// First age at which accrued interest exceeds total deposits
    pub crossover_age: Option<u32>,
}

impl ProjectionSummary {
    /// Summarize a projection. Returns `None` for an empty slice.
    pub fn from_records(records: &[YearRecord]) -> Option<Self> {
        let last = records.last()?;

        let growth_multiple = if last.total_deposits > 0.0 {
            last.balance / last.total_deposits
        } else {
            0.0
        };

        let crossover_age = records
            .iter()
            .find(|r| r.total_interest > r.total_deposits)
            .map(|r| r.age);

        Some(Self {
            final_year: last.year,
            final_age: last.age,
            final_balance: last.balance,
            final_pv_balance: last.pv_balance,
            total_deposits: last.total_deposits,
            total_interest: last.total_interest,
            growth_multiple,
            crossover_age,
        })
    }
}
