use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::ProjectionError;
use crate::models::YearRecord;

/// Column headers for exported tables.
///
/// The two inflation-adjusted columns are labelled with the first projected
/// year, e.g. `Balance 2025 Dollars`.
pub fn table_headers(records: &[YearRecord]) -> Vec<String> {
    let base = records
        .first()
        .map(|r| r.year.to_string())
        .unwrap_or_else(|| "Year 0".to_string());

    vec![
        "Year".to_string(),
        "Age".to_string(),
        "Deposits".to_string(),
        "Interest".to_string(),
        "Total Deposits".to_string(),
        "Accrued Interest".to_string(),
        "Balance".to_string(),
        format!("Balance {base} Dollars"),
        format!("Deposits {base} Dollars"),
    ]
}

/// Write records as CSV to any writer, rounding values to `decimals` places.
pub fn write_csv_to<W: Write>(
    records: &[YearRecord],
    writer: W,
    decimals: u32,
) -> Result<(), ProjectionError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(table_headers(records))?;
    for record in records {
        wtr.serialize(record.rounded(decimals))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render records as CSV bytes.
pub fn csv_to_bytes(records: &[YearRecord], decimals: u32) -> Result<Vec<u8>, ProjectionError> {
    let mut buf = Vec::new();
    write_csv_to(records, &mut buf, decimals)?;
    Ok(buf)
}

/// Write records to a CSV file.
pub fn write_csv(
    records: &[YearRecord],
    path: impl AsRef<Path>,
    decimals: u32,
) -> Result<(), ProjectionError> {
    let path = path.as_ref();
    debug!(path = %path.display(), rows = records.len(), "writing CSV");
    let file = std::fs::File::create(path)?;
    write_csv_to(records, file, decimals)
}
