use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement,
    Table,
};

use crate::analysis::ProjectionSummary;
use crate::io::table_headers;
use crate::models::YearRecord;

/// Format a currency value with thousands separators and two decimals.
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac}")
}

fn money_cell(value: f64) -> Cell {
    Cell::new(format_money(value)).set_alignment(CellAlignment::Right)
}

/// Format the year-by-year projection table as a string.
pub fn format_projection_table(records: &[YearRecord]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Detailed Projection".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if records.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(table_headers(records));

    for r in records {
        table.add_row(vec![
            Cell::new(r.year),
            Cell::new(r.age),
            money_cell(r.contribution),
            money_cell(r.interest),
            money_cell(r.total_deposits),
            money_cell(r.total_interest),
            money_cell(r.balance),
            money_cell(r.pv_balance),
            money_cell(r.pv_deposits),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the year-by-year projection table.
pub fn print_projection_table(records: &[YearRecord]) {
    print!("{}", format_projection_table(records));
}

/// Format the headline summary as a string.
pub fn format_projection_summary(summary: &ProjectionSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Projection Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    table.add_row(vec![
        Cell::new("Final Year"),
        Cell::new(format!("{} (age {})", summary.final_year, summary.final_age)),
    ]);
    table.add_row(vec![
        Cell::new("Final Balance"),
        money_cell(summary.final_balance),
    ]);
    table.add_row(vec![
        Cell::new("Final Balance (today's dollars)"),
        money_cell(summary.final_pv_balance),
    ]);
    table.add_row(vec![
        Cell::new("Total Deposits"),
        money_cell(summary.total_deposits),
    ]);
    table.add_row(vec![
        Cell::new("Accrued Interest"),
        money_cell(summary.total_interest),
    ]);
    table.add_row(vec![
        Cell::new("Growth Multiple"),
        Cell::new(format!("{:.2}x", summary.growth_multiple)),
    ]);
    table.add_row(vec![
        Cell::new("Interest Exceeds Deposits"),
        Cell::new(
            summary
                .crossover_age
                .map(|age| format!("at age {age}"))
                .unwrap_or_else(|| "never".to_string()),
        ),
    ]);

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the headline summary.
pub fn print_projection_summary(summary: &ProjectionSummary) {
    print!("{}", format_projection_summary(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{project, ProjectionSummary};
    use crate::models::ProjectionParams;

    fn sample_records() -> Vec<YearRecord> {
        project(&ProjectionParams {
            initial_amount: 1000.0,
            annual_return_rate: 0.10,
            yearly_contribution: 0.0,
            contribution_growth_rate: 0.0,
            inflation_rate: 0.0,
            years: 1,
            starting_age: 30,
            starting_year: 2025,
        })
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(999.999), "$1,000.00");
        assert_eq!(format_money(1210.0), "$1,210.00");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-42.5), "-$42.50");
    }

    #[test]
    fn test_projection_table_headers() {
        let output = format_projection_table(&sample_records());
        assert!(output.contains("Detailed Projection"));
        assert!(output.contains("Total Deposits"));
        assert!(output.contains("Accrued Interest"));
        assert!(output.contains("Balance 2025 Dollars"));
    }

    #[test]
    fn test_projection_table_values() {
        let output = format_projection_table(&sample_records());
        assert!(output.contains("2025"));
        assert!(output.contains("2026"));
        assert!(output.contains("$1,100.00"));
        assert!(output.contains("$1,210.00"));
    }

    #[test]
    fn test_projection_table_empty() {
        let output = format_projection_table(&[]);
        assert!(output.contains("No data available."));
    }

    #[test]
    fn test_summary_table() {
        let summary = ProjectionSummary::from_records(&sample_records()).unwrap();
        let output = format_projection_summary(&summary);
        assert!(output.contains("Projection Summary"));
        assert!(output.contains("2026 (age 31)"));
        assert!(output.contains("$1,210.00"));
        assert!(output.contains("1.21x"));
        assert!(output.contains("never"));
    }
}
