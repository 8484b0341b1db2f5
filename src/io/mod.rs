mod csv_io;
mod excel_io;
mod json_io;

use std::path::Path;
use std::str::FromStr;

use crate::config::DEFAULT_DECIMALS;
use crate::error::ProjectionError;
use crate::models::YearRecord;

pub use csv_io::{csv_to_bytes, table_headers, write_csv, write_csv_to};
pub use excel_io::{excel_to_bytes, write_excel};
pub use json_io::{json_to_string, read_params_json, read_params_json_from_bytes, write_json};

/// Trait for writing a projection table to a file.
pub trait ProjectionWriter {
    fn write(&self, records: &[YearRecord], path: &Path) -> Result<(), ProjectionError>;
}

/// CSV format writer.
pub struct CsvFormat {
    pub decimals: u32,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl ProjectionWriter for CsvFormat {
    fn write(&self, records: &[YearRecord], path: &Path) -> Result<(), ProjectionError> {
        write_csv(records, path, self.decimals)
    }
}

/// JSON format writer. Values are written at full precision unless
/// `decimals` is set.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
    pub decimals: Option<u32>,
}

impl ProjectionWriter for JsonFormat {
    fn write(&self, records: &[YearRecord], path: &Path) -> Result<(), ProjectionError> {
        match self.decimals {
            Some(d) => write_json(&round_records(records, d), path, self.pretty),
            None => write_json(records, path, self.pretty),
        }
    }
}

/// Excel (.xlsx) format writer.
pub struct ExcelFormat {
    pub decimals: u32,
}

impl Default for ExcelFormat {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl ProjectionWriter for ExcelFormat {
    fn write(&self, records: &[YearRecord], path: &Path) -> Result<(), ProjectionError> {
        write_excel(records, path, self.decimals)
    }
}

fn round_records(records: &[YearRecord], decimals: u32) -> Vec<YearRecord> {
    records.iter().map(|r| r.rounded(decimals)).collect()
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ProjectionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        ext.parse()
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Render records in this format, rounded to `decimals` places.
    pub fn to_bytes(self, records: &[YearRecord], decimals: u32) -> Result<Vec<u8>, ProjectionError> {
        match self {
            ExportFormat::Csv => csv_to_bytes(records, decimals),
            ExportFormat::Json => {
                Ok(json_to_string(&round_records(records, decimals), true)?.into_bytes())
            }
            ExportFormat::Excel => excel_to_bytes(records, decimals),
        }
    }

    pub fn writer(self, pretty: bool, decimals: u32) -> Box<dyn ProjectionWriter> {
        match self {
            ExportFormat::Csv => Box::new(CsvFormat { decimals }),
            ExportFormat::Json => Box::new(JsonFormat {
                pretty,
                decimals: Some(decimals),
            }),
            ExportFormat::Excel => Box::new(ExcelFormat { decimals }),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" | "excel" => Ok(ExportFormat::Excel),
            other => Err(ProjectionError::ParseError(format!(
                "Unsupported export format: {other:?}. Use csv, json, or xlsx"
            ))),
        }
    }
}

/// Write records to `path`, choosing the format from its extension.
pub fn write_records(
    records: &[YearRecord],
    path: impl AsRef<Path>,
    pretty: bool,
    decimals: u32,
) -> Result<ExportFormat, ProjectionError> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    format.writer(pretty, decimals).write(records, path)?;
    Ok(format)
}
