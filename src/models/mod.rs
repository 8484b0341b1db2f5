mod params;
mod record;

pub use params::{
    ParameterInputs, ProjectionParams, MAX_STARTING_AGE, MAX_STARTING_YEAR, MAX_YEARS,
    MIN_STARTING_AGE, MIN_STARTING_YEAR, MIN_YEARS,
};
pub use record::{round_to, YearRecord, MAX_DECIMALS};
