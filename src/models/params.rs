use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Engine parameters for a single projection run.
///
/// All rates are fractions (`0.08` for 8%). Use [`ParameterInputs`] to build
/// these from percentage inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Starting balance
    pub initial_amount: f64,
    /// Fraction of the balance earned each year
    pub annual_return_rate: f64,
    /// Contribution deposited in year 0
    pub yearly_contribution: f64,
    /// Growth applied to the contribution after each year
    pub contribution_growth_rate: f64,
    /// Rate used to discount nominal values back to year-0 dollars
    pub inflation_rate: f64,
    /// Years to project after year 0
    pub years: u32,
    pub starting_age: u32,
    pub starting_year: i32,
}

impl ProjectionParams {
    /// Check that every value is finite, amounts are non-negative, rates lie
    /// in `0.0..=1.0`, and the final age and year are representable.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        check_amount("initial_amount", self.initial_amount)?;
        check_amount("yearly_contribution", self.yearly_contribution)?;
        check_rate("annual_return_rate", self.annual_return_rate)?;
        check_rate("contribution_growth_rate", self.contribution_growth_rate)?;
        check_rate("inflation_rate", self.inflation_rate)?;

        let years = i32::try_from(self.years).map_err(|_| {
            ProjectionError::ValidationError(format!(
                "years must be at most {}, got {}",
                i32::MAX,
                self.years
            ))
        })?;
        if self.starting_age.checked_add(self.years).is_none() {
            return Err(ProjectionError::ValidationError(format!(
                "starting_age {} plus {} years overflows",
                self.starting_age, self.years
            )));
        }
        if self.starting_year.checked_add(years).is_none() {
            return Err(ProjectionError::ValidationError(format!(
                "starting_year {} plus {} years overflows",
                self.starting_year, self.years
            )));
        }
        Ok(())
    }
}

fn check_amount(name: &str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProjectionError::ValidationError(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

fn check_rate(name: &str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ProjectionError::ValidationError(format!(
            "{name} must be in 0.0..=1.0, got {value}"
        )));
    }
    Ok(())
}

/// Raw user inputs, with rates given in percent.
///
/// Defaults and bounds mirror the calculator's input controls. Missing fields
/// fall back to the defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterInputs {
    pub initial_amount: f64,
    pub annual_return_percent: f64,
    pub yearly_contribution: f64,
    pub contribution_growth_percent: f64,
    pub inflation_percent: f64,
    pub years: u32,
    pub starting_age: u32,
    pub starting_year: i32,
}

pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 100;
pub const MIN_STARTING_AGE: u32 = 18;
pub const MAX_STARTING_AGE: u32 = 200;
pub const MIN_STARTING_YEAR: i32 = 1900;
pub const MAX_STARTING_YEAR: i32 = 2200;

impl Default for ParameterInputs {
    fn default() -> Self {
        Self {
            initial_amount: 10_000.0,
            annual_return_percent: 8.0,
            yearly_contribution: 6_000.0,
            contribution_growth_percent: 5.0,
            inflation_percent: 3.0,
            years: 50,
            starting_age: 30,
            starting_year: 2025,
        }
    }
}

impl ParameterInputs {
    /// Validate inputs against the allowed ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use investment_projector::ParameterInputs;
    ///
    /// let mut inputs = ParameterInputs::default();
    /// assert!(inputs.validate().is_ok());
    ///
    /// inputs.inflation_percent = 120.0;
    /// assert!(inputs.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ProjectionError> {
        check_amount("initial_amount", self.initial_amount)?;
        check_amount("yearly_contribution", self.yearly_contribution)?;
        check_percent("annual_return_percent", self.annual_return_percent)?;
        check_percent("contribution_growth_percent", self.contribution_growth_percent)?;
        check_percent("inflation_percent", self.inflation_percent)?;

        if !(MIN_YEARS..=MAX_YEARS).contains(&self.years) {
            return Err(ProjectionError::ValidationError(format!(
                "years must be in {MIN_YEARS}..={MAX_YEARS}, got {}",
                self.years
            )));
        }
        if !(MIN_STARTING_AGE..=MAX_STARTING_AGE).contains(&self.starting_age) {
            return Err(ProjectionError::ValidationError(format!(
                "starting_age must be in {MIN_STARTING_AGE}..={MAX_STARTING_AGE}, got {}",
                self.starting_age
            )));
        }
        if !(MIN_STARTING_YEAR..=MAX_STARTING_YEAR).contains(&self.starting_year) {
            return Err(ProjectionError::ValidationError(format!(
                "starting_year must be in {MIN_STARTING_YEAR}..={MAX_STARTING_YEAR}, got {}",
                self.starting_year
            )));
        }
        Ok(())
    }

    /// Validate and convert percentages to the fractional engine parameters.
    pub fn to_params(&self) -> Result<ProjectionParams, ProjectionError> {
        self.validate()?;
        Ok(ProjectionParams {
            initial_amount: self.initial_amount,
            annual_return_rate: self.annual_return_percent / 100.0,
            yearly_contribution: self.yearly_contribution,
            contribution_growth_rate: self.contribution_growth_percent / 100.0,
            inflation_rate: self.inflation_percent / 100.0,
            years: self.years,
            starting_age: self.starting_age,
            starting_year: self.starting_year,
        })
    }
}

fn check_percent(name: &str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ProjectionError::ValidationError(format!(
            "{name} must be in 0..=100, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn base_params() -> ProjectionParams {
        ProjectionParams {
            initial_amount: 1000.0,
            annual_return_rate: 0.07,
            yearly_contribution: 500.0,
            contribution_growth_rate: 0.02,
            inflation_rate: 0.03,
            years: 10,
            starting_age: 40,
            starting_year: 2030,
        }
    }

    #[test]
    fn test_valid_params() {
        assert!(base_params().validate().is_ok());
    }

    #[test]
    fn test_zero_rates_are_valid() {
        let mut p = base_params();
        p.annual_return_rate = 0.0;
        p.contribution_growth_rate = 0.0;
        p.inflation_rate = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_rate_bounds_inclusive() {
        let mut p = base_params();
        p.annual_return_rate = 1.0;
        p.inflation_rate = 1.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_negative_initial_amount_rejected() {
        let mut p = base_params();
        p.initial_amount = -1.0;
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("initial_amount"));
    }

    #[test]
    fn test_rate_above_one_rejected() {
        let mut p = base_params();
        p.annual_return_rate = 8.0;
        let err = p.validate().unwrap_err();
        assert!(matches!(err, ProjectionError::ValidationError(_)));
        assert!(err.to_string().contains("annual_return_rate"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut p = base_params();
        p.contribution_growth_rate = -0.01;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let mut p = base_params();
        p.inflation_rate = f64::NAN;
        assert!(p.validate().is_err());

        let mut p = base_params();
        p.yearly_contribution = f64::INFINITY;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_final_age_overflow_rejected() {
        let mut p = base_params();
        p.starting_age = u32::MAX;
        p.years = 2;
        let err = p.validate().unwrap_err();
        assert!(matches!(err, ProjectionError::ValidationError(_)));
        assert!(err.to_string().contains("starting_age"));
    }

    #[test]
    fn test_final_year_overflow_rejected() {
        let mut p = base_params();
        p.starting_year = i32::MAX - 5;
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("starting_year"));

        p.starting_year = i32::MAX - 10;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_years_beyond_i32_rejected() {
        let mut p = base_params();
        p.starting_age = 0;
        p.years = i32::MAX as u32 + 1;
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("years must be at most"));
    }

    #[test]
    fn test_negative_years_fails_to_parse() {
        let json = r#"{
            "initial_amount": 0.0, "annual_return_rate": 0.0,
            "yearly_contribution": 0.0, "contribution_growth_rate": 0.0,
            "inflation_rate": 0.0, "years": -3,
            "starting_age": 30, "starting_year": 2025
        }"#;
        assert!(serde_json::from_str::<ProjectionParams>(json).is_err());
    }

    #[test]
    fn test_input_defaults() {
        let inputs = ParameterInputs::default();
        assert_eq!(inputs.initial_amount, 10_000.0);
        assert_eq!(inputs.annual_return_percent, 8.0);
        assert_eq!(inputs.yearly_contribution, 6_000.0);
        assert_eq!(inputs.contribution_growth_percent, 5.0);
        assert_eq!(inputs.inflation_percent, 3.0);
        assert_eq!(inputs.years, 50);
        assert_eq!(inputs.starting_age, 30);
        assert_eq!(inputs.starting_year, 2025);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_to_params_converts_percentages() {
        let params = ParameterInputs::default().to_params().unwrap();
        assert_approx_eq!(params.annual_return_rate, 0.08);
        assert_approx_eq!(params.contribution_growth_rate, 0.05);
        assert_approx_eq!(params.inflation_rate, 0.03);
        assert_eq!(params.years, 50);
        assert_eq!(params.starting_year, 2025);
    }

    #[test]
    fn test_percent_above_hundred_rejected() {
        let inputs = ParameterInputs {
            annual_return_percent: 100.5,
            ..Default::default()
        };
        assert!(inputs.to_params().is_err());
    }

    #[test]
    fn test_years_out_of_range_rejected() {
        let zero = ParameterInputs {
            years: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let too_many = ParameterInputs {
            years: 101,
            ..Default::default()
        };
        let err = too_many.validate().unwrap_err();
        assert!(err.to_string().contains("years must be in 1..=100"));
    }

    #[test]
    fn test_starting_age_and_year_bounds() {
        let young = ParameterInputs {
            starting_age: 17,
            ..Default::default()
        };
        assert!(young.validate().is_err());

        let early = ParameterInputs {
            starting_year: 1899,
            ..Default::default()
        };
        assert!(early.validate().is_err());

        let edge = ParameterInputs {
            starting_age: 200,
            starting_year: 2200,
            years: 100,
            ..Default::default()
        };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_inputs_missing_fields_use_defaults() {
        let inputs: ParameterInputs = serde_json::from_str(r#"{"years": 10}"#).unwrap();
        assert_eq!(inputs.years, 10);
        assert_eq!(inputs.initial_amount, 10_000.0);
        assert_eq!(inputs.starting_age, 30);
    }
}
