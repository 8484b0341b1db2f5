mod charts;
mod tables;

pub use charts::{format_projection_chart, print_projection_chart};
pub use tables::{
    format_money, format_projection_summary, format_projection_table, print_projection_summary,
    print_projection_table,
};
