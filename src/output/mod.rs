//! Output formatting for subnet reports.
//!
//! - [`terminal`] - aligned text with colored labels
//! - [`json`] - JSON for scripting

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{
    format_field, pad_label, print_report, render_text, report_lines, write_report, Highlight,
    ReportLine, LABEL_WIDTH,
};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::SubnetReport;

/// Write the report to stdout in the configured format.
pub fn emit(report: &SubnetReport, format: OutputFormat) -> Result<()> {
    log::info!("Writing report for {} as {:?}", report.cidr, format);
    match format {
        OutputFormat::Text => print_report(report)?,
        OutputFormat::Json => println!("{}", render_json(report)?),
    }
    Ok(())
}
