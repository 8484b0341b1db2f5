use crate::models::{ProjectionParams, YearRecord};

/// Project an investment balance year by year.
///
/// Returns `params.years + 1` records, one per elapsed year starting at year
/// 0. Each year the current contribution is deposited first, interest is then
/// earned on the whole balance, and the contribution grows only after the
/// year's record has been emitted. Values are not rounded.
///
/// The function does no validation; call [`ProjectionParams::validate`] at
/// the boundary.
///
/// # Examples
///
/// ```
/// use investment_projector::{project, ProjectionParams};
///
/// let params = ProjectionParams {
///     initial_amount: 1000.0,
///     annual_return_rate: 0.10,
///     yearly_contribution: 0.0,
///     contribution_growth_rate: 0.0,
///     inflation_rate: 0.0,
///     years: 1,
///     starting_age: 30,
///     starting_year: 2025,
/// };
/// let records = project(&params);
/// assert_eq!(records.len(), 2);
/// assert!((records[1].balance - 1210.0).abs() < 1e-9);
/// ```
pub fn project(params: &ProjectionParams) -> Vec<YearRecord> {
    let mut records = Vec::with_capacity(params.years as usize + 1);

    let mut balance = params.initial_amount;
    let mut total_deposits = params.initial_amount;
    let mut total_interest = 0.0;
    let mut contribution = params.yearly_contribution;

    for i in 0..=params.years {
        balance += contribution;
        total_deposits += contribution;

        let interest = balance * params.annual_return_rate;
        balance += interest;
        total_interest += interest;

        // Year 0 divides by 1.
        let discount = (1.0 + params.inflation_rate).powi(i as i32);

        records.push(YearRecord {
            year: params.starting_year + i as i32,
            age: params.starting_age + i,
            contribution,
            interest,
            total_deposits,
            total_interest,
            balance,
            pv_balance: balance / discount,
            pv_deposits: total_deposits / discount,
        });

        contribution *= 1.0 + params.contribution_growth_rate;
    }

    records
}
