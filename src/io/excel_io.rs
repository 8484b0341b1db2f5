use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ProjectionError;
use crate::models::{YearRecord, MAX_DECIMALS};

use super::csv_io::table_headers;

/// Excel number format showing exactly `decimals` places, e.g. `#,##0.00`.
fn money_num_format(decimals: u32) -> String {
    let places = decimals.min(MAX_DECIMALS) as usize;
    if places == 0 {
        "#,##0".to_string()
    } else {
        format!("#,##0.{}", "0".repeat(places))
    }
}

fn build_workbook(records: &[YearRecord], decimals: u32) -> Result<Workbook, ProjectionError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Projection")?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format(money_num_format(decimals));

    for (col, header) in table_headers(records).iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        let r = record.rounded(decimals);
        worksheet.write_number(row, 0, r.year as f64)?;
        worksheet.write_number(row, 1, r.age as f64)?;

        let values = [
            r.contribution,
            r.interest,
            r.total_deposits,
            r.total_interest,
            r.balance,
            r.pv_balance,
            r.pv_deposits,
        ];
        for (offset, value) in values.iter().enumerate() {
            worksheet.write_number_with_format(row, offset as u16 + 2, *value, &money_format)?;
        }
    }

    Ok(workbook)
}

/// Write records to an Excel (.xlsx) file.
pub fn write_excel(
    records: &[YearRecord],
    path: impl AsRef<Path>,
    decimals: u32,
) -> Result<(), ProjectionError> {
    let mut workbook = build_workbook(records, decimals)?;
    workbook.save(path.as_ref())?;
    Ok(())
}

/// Render records as an in-memory .xlsx document.
pub fn excel_to_bytes(records: &[YearRecord], decimals: u32) -> Result<Vec<u8>, ProjectionError> {
    let mut workbook = build_workbook(records, decimals)?;
    Ok(workbook.save_to_buffer()?)
}
