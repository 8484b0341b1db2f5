use tracing::{debug, info};

use crate::analysis::{project, ProjectionSummary};
use crate::error::ProjectionError;
use crate::models::{ParameterInputs, ProjectionParams, YearRecord};

/// Validated projection over a fixed set of parameters.
///
/// The records are computed once, in [`Projector::new`], and never change.
#[derive(Debug, Clone)]
pub struct Projector {
    params: ProjectionParams,
    records: Vec<YearRecord>,
}

impl Projector {
    /// Validate `params` and run the projection.
    pub fn new(params: ProjectionParams) -> Result<Self, ProjectionError> {
        params.validate()?;
        debug!(?params, "running projection");

        let records = project(&params);
        if let Some(last) = records.last() {
            info!(
                years = params.years,
                final_year = last.year,
                final_balance = last.balance,
                "projection complete"
            );
        }

        Ok(Self { params, records })
    }

    /// Convert percentage inputs, validate them, and run the projection.
    pub fn from_inputs(inputs: &ParameterInputs) -> Result<Self, ProjectionError> {
        Self::new(inputs.to_params()?)
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    /// Headline figures for this projection.
    pub fn summary(&self) -> Option<ProjectionSummary> {
        ProjectionSummary::from_records(&self.records)
    }

    pub fn into_records(self) -> Vec<YearRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> ProjectionParams {
        ProjectionParams {
            initial_amount: 10_000.0,
            annual_return_rate: 0.08,
            yearly_contribution: 6_000.0,
            contribution_growth_rate: 0.05,
            inflation_rate: 0.03,
            years: 10,
            starting_age: 30,
            starting_year: 2025,
        }
    }

    #[test]
    fn test_projector_matches_engine() {
        let params = sample_params();
        let projector = Projector::new(params.clone()).unwrap();
        assert_eq!(projector.records(), project(&params).as_slice());
        assert_eq!(projector.params(), &params);
    }

    #[test]
    fn test_projector_rejects_invalid_params() {
        let mut params = sample_params();
        params.inflation_rate = 3.0;
        let err = Projector::new(params).unwrap_err();
        assert!(matches!(err, ProjectionError::ValidationError(_)));
    }

    #[test]
    fn test_projector_rejects_overflowing_labels() {
        let mut params = sample_params();
        params.starting_age = u32::MAX;
        params.years = 2;
        let err = Projector::new(params).unwrap_err();
        assert!(matches!(err, ProjectionError::ValidationError(_)));

        let mut params = sample_params();
        params.starting_year = i32::MAX;
        assert!(Projector::new(params).is_err());
    }

    #[test]
    fn test_projector_from_inputs() {
        let projector = Projector::from_inputs(&ParameterInputs::default()).unwrap();
        assert_eq!(projector.records().len(), 51);
        assert_eq!(projector.params().years, 50);
    }

    #[test]
    fn test_projector_from_invalid_inputs() {
        let inputs = ParameterInputs {
            years: 0,
            ..Default::default()
        };
        assert!(Projector::from_inputs(&inputs).is_err());
    }

    #[test]
    fn test_summary_and_into_records() {
        let projector = Projector::new(sample_params()).unwrap();
        let summary = projector.summary().unwrap();
        assert_eq!(summary.final_year, 2035);
        let records = projector.into_records();
        assert_eq!(records.len(), 11);
        assert_eq!(summary.final_balance, records[10].balance);
    }
}
