use std::path::Path;

use crate::error::ProjectionError;
use crate::models::{ParameterInputs, YearRecord};

/// Read projection inputs from a JSON file. Missing fields take their defaults.
pub fn read_params_json(path: impl AsRef<Path>) -> Result<ParameterInputs, ProjectionError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_params(&content)
}

/// Read projection inputs from JSON bytes.
pub fn read_params_json_from_bytes(data: &[u8]) -> Result<ParameterInputs, ProjectionError> {
    let content = std::str::from_utf8(data)
        .map_err(|e| ProjectionError::ParseError(format!("Invalid UTF-8: {e}")))?;
    parse_params(content)
}

fn parse_params(content: &str) -> Result<ParameterInputs, ProjectionError> {
    let inputs: ParameterInputs = serde_json::from_str(content)?;
    inputs.validate()?;
    Ok(inputs)
}

/// Render records as a JSON array.
pub fn json_to_string(records: &[YearRecord], pretty: bool) -> Result<String, ProjectionError> {
    let content = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(content)
}

/// Write records to a JSON file.
pub fn write_json(
    records: &[YearRecord],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ProjectionError> {
    std::fs::write(path.as_ref(), json_to_string(records, pretty)?)?;
    Ok(())
}
