use colored::{ColoredString, Colorize};

use crate::models::YearRecord;

const MIN_WIDTH: usize = 10;
const MIN_HEIGHT: usize = 4;
const LABEL_WIDTH: usize = 9;

/// The four plotted series, drawn back to front so `Balance` stays on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Series {
    Balance,
    PvBalance,
    Deposits,
    PvDeposits,
}

impl Series {
    const ALL: [Series; 4] = [
        Series::Balance,
        Series::PvBalance,
        Series::Deposits,
        Series::PvDeposits,
    ];

    fn label(self) -> &'static str {
        match self {
            Series::Balance => "Balance",
            Series::PvBalance => "Balance (today's dollars)",
            Series::Deposits => "Total Deposits",
            Series::PvDeposits => "Deposits (today's dollars)",
        }
    }

    fn marker(self) -> char {
        match self {
            Series::Balance => '*',
            Series::PvBalance => '+',
            Series::Deposits => 'o',
            Series::PvDeposits => '.',
        }
    }

    fn value(self, record: &YearRecord) -> f64 {
        match self {
            Series::Balance => record.balance,
            Series::PvBalance => record.pv_balance,
            Series::Deposits => record.total_deposits,
            Series::PvDeposits => record.pv_deposits,
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            Series::Balance => text.green(),
            Series::PvBalance => text.cyan(),
            Series::Deposits => text.yellow(),
            Series::PvDeposits => text.magenta(),
        }
    }
}

/// Short currency label for axis ticks, e.g. `$1.2M`.
fn compact_money(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("${:.1}K", value / 1e3)
    } else {
        format!("${:.0}", value)
    }
}

/// Value of `series` at fractional record position `t`, linearly interpolated.
fn interpolate(records: &[YearRecord], series: Series, t: f64) -> f64 {
    let lo = t.floor() as usize;
    let hi = (lo + 1).min(records.len() - 1);
    let frac = t - lo as f64;
    let a = series.value(&records[lo]);
    let b = series.value(&records[hi]);
    a + (b - a) * frac
}

/// Format a terminal line chart of the projection against age.
///
/// Plots nominal balance, inflation-adjusted balance, total deposits and
/// inflation-adjusted deposits. `width` and `height` size the plot area in
/// characters.
pub fn format_projection_chart(records: &[YearRecord], width: usize, height: usize) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        "Projected Investment Growth Over Time".bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if records.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let width = width.max(MIN_WIDTH);
    let height = height.max(MIN_HEIGHT);

    let max_value = records
        .iter()
        .flat_map(|r| Series::ALL.iter().map(move |s| s.value(r)))
        .fold(0.0f64, f64::max);
    let scale = if max_value > 0.0 { max_value } else { 1.0 };

    let mut grid: Vec<Vec<Option<Series>>> = vec![vec![None; width]; height];
    let last_index = (records.len() - 1) as f64;

    for series in Series::ALL.iter().rev() {
        for col in 0..width {
            let t = if records.len() == 1 {
                if col > 0 {
                    break;
                }
                0.0
            } else {
                col as f64 * last_index / (width - 1) as f64
            };
            let value = interpolate(records, *series, t).max(0.0);
            let level = ((value / scale) * (height - 1) as f64).round() as usize;
            let row = height - 1 - level.min(height - 1);
            grid[row][col] = Some(*series);
        }
    }

    for (row_idx, row) in grid.iter().enumerate() {
        let label = if row_idx == 0 {
            compact_money(max_value)
        } else if row_idx == height / 2 {
            compact_money(max_value / 2.0)
        } else if row_idx == height - 1 {
            compact_money(0.0)
        } else {
            String::new()
        };
        output.push_str(&format!("{label:>LABEL_WIDTH$} │"));
        for cell in row {
            match cell {
                Some(series) => {
                    let marker = series.marker().to_string();
                    output.push_str(&series.paint(&marker).to_string());
                }
                None => output.push(' '),
            }
        }
        output.push('\n');
    }

    output.push_str(&format!("{:>LABEL_WIDTH$} └{}\n", "", "─".repeat(width)));

    let first_age = records[0].age.to_string();
    let last_age = records[records.len() - 1].age.to_string();
    let gap = width.saturating_sub(first_age.len() + last_age.len());
    output.push_str(&format!(
        "{:>LABEL_WIDTH$}  {first_age}{}{last_age}\n",
        "",
        " ".repeat(gap)
    ));
    output.push_str(&format!("{:>LABEL_WIDTH$}  {:^width$}\n", "", "Age"));

    output.push('\n');
    for series in Series::ALL {
        let marker = series.marker().to_string();
        output.push_str(&format!(
            "  {} {}\n",
            series.paint(&marker),
            series.label()
        ));
    }

    output
}

/// Print a terminal line chart of the projection.
pub fn print_projection_chart(records: &[YearRecord], width: usize, height: usize) {
    print!("{}", format_projection_chart(records, width, height));
}
