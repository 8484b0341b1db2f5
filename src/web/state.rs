use crate::config::ProjectorConfig;
use crate::models::ParameterInputs;

/// Shared, read-only server state.
pub struct AppState {
    pub config: ProjectorConfig,
}

impl AppState {
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    /// Inputs used for any field a request leaves out.
    pub fn defaults(&self) -> &ParameterInputs {
        &self.config.parameters
    }

    pub fn decimals(&self) -> u32 {
        self.config.output.decimals
    }

    /// Download file name with the extension swapped for `ext`.
    pub fn file_name(&self, ext: &str) -> String {
        let stem = std::path::Path::new(&self.config.output.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("investment_projection");
        format!("{stem}.{ext}")
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ProjectorConfig::default())
    }
}
