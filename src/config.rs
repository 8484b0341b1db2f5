use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProjectionError;
use crate::models::{ParameterInputs, MAX_DECIMALS};

pub const DEFAULT_DECIMALS: u32 = 2;
pub const DEFAULT_FILE_NAME: &str = "investment_projection.csv";

/// Settings for how projections are rounded and exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Decimal places used by tables and exports
    pub decimals: u32,
    /// Suggested file name for downloads
    pub file_name: String,
}

impl OutputSettings {
    /// Reject decimal counts outside `0..=MAX_DECIMALS`.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ProjectionError::ValidationError(format!(
                "output.decimals must be in 0..={MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

/// Top-level TOML configuration.
///
/// ```toml
/// [parameters]
/// initial_amount = 25000.0
/// annual_return_percent = 7.0
/// years = 30
///
/// [output]
/// decimals = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    pub parameters: ParameterInputs,
    pub output: OutputSettings,
}

impl ProjectorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ProjectionError> {
        let config: ProjectorConfig = toml::from_str(content)?;
        config.parameters.validate()?;
        config.output.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ProjectionError> {
        toml::to_string_pretty(self)
            .map_err(|e| ProjectionError::ParseError(format!("Cannot encode config: {e}")))
    }
}

/// Load a configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<ProjectorConfig, ProjectionError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)?;
    ProjectorConfig::from_toml_str(&content)
}

/// Write a configuration file.
pub fn write_config(config: &ProjectorConfig, path: impl AsRef<Path>) -> Result<(), ProjectionError> {
    std::fs::write(path.as_ref(), config.to_toml_string()?)?;
    Ok(())
}
