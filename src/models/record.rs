use serde::{Deserialize, Serialize};

/// One year of a projection.
///
/// Monetary values are nominal unless prefixed with `pv_`, in which case they
/// are expressed in year-0 dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Calendar year label
    pub year: i32,
    /// Age label
    pub age: u32,
    /// Amount deposited this year
    pub contribution: f64,
    /// Interest earned this year
    pub interest: f64,
    /// Cumulative deposits, including the initial amount
    pub total_deposits: f64,
    /// Cumulative interest
    pub total_interest: f64,
    /// Nominal ending balance
    pub balance: f64,
    /// Ending balance in year-0 dollars
    pub pv_balance: f64,
    /// Cumulative deposits in year-0 dollars
    pub pv_deposits: f64,
}

impl YearRecord {
    /// Copy of this record with every monetary value rounded to `decimals`
    /// places. Halfway cases round away from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use investment_projector::YearRecord;
    ///
    /// let rec = YearRecord {
    ///     year: 2025, age: 30,
    ///     contribution: 100.0, interest: 8.123456,
    ///     total_deposits: 100.0, total_interest: 8.123456,
    ///     balance: 108.123456, pv_balance: 108.123456, pv_deposits: 100.0,
    /// };
    /// assert_eq!(rec.rounded(2).balance, 108.12);
    /// ```
    pub fn rounded(&self, decimals: u32) -> Self {
        let round = |v: f64| round_to(v, decimals);
        Self {
            year: self.year,
            age: self.age,
            contribution: round(self.contribution),
            interest: round(self.interest),
            total_deposits: round(self.total_deposits),
            total_interest: round(self.total_interest),
            balance: round(self.balance),
            pv_balance: round(self.pv_balance),
            pv_deposits: round(self.pv_deposits),
        }
    }
}

/// Most decimal places accepted for rounded output.
pub const MAX_DECIMALS: u32 = 10;

/// Round `value` to `decimals` decimal places.
///
/// Requests above [`MAX_DECIMALS`] return `value` unchanged, as does any
/// value too large to scale.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals > MAX_DECIMALS {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
