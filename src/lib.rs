pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

#[cfg(feature = "web")]
pub mod web;

pub use analysis::{project, ProjectionSummary, Projector};
pub use config::{load_config, ProjectorConfig};
pub use error::ProjectionError;
pub use io::{ExportFormat, ProjectionWriter};
pub use models::{ParameterInputs, ProjectionParams, YearRecord};
