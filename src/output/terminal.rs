//! Terminal output of a [`SubnetReport`].

use crate::models::SubnetReport;
use colored::Colorize;
use std::io::{self, Write};

/// Width the labels are padded to, so values line up.
pub const LABEL_WIDTH: usize = 20;

/// How a value is highlighted when printed to a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Plain,
    Good,
    Warn,
}

/// One labelled line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
    pub highlight: Highlight,
}

impl ReportLine {
    fn plain<T: ToString>(label: &'static str, value: T) -> ReportLine {
        ReportLine {
            label,
            value: value.to_string(),
            highlight: Highlight::Plain,
        }
    }

    fn with(mut self, highlight: Highlight) -> ReportLine {
        self.highlight = highlight;
        self
    }
}

/// Report lines in print order.
pub fn report_lines(report: &SubnetReport) -> Vec<ReportLine> {
    let kind = ReportLine::plain("Type", report.kind());
    let hosts = ReportLine::plain("Usable hosts", report.usable_hosts);
    let mut lines = vec![
        ReportLine::plain("Class", report.class),
        if report.classful {
            kind.with(Highlight::Good)
        } else {
            kind
        },
        ReportLine::plain("IP", report.address),
        ReportLine::plain("Subnet mask", report.mask),
        if report.usable_hosts < 0 {
            hosts.with(Highlight::Warn)
        } else {
            hosts
        },
        ReportLine::plain("Network address", report.network),
        ReportLine::plain("Broadcast address", report.broadcast),
        ReportLine::plain("First usable host", report.first_usable),
        ReportLine::plain("Last usable host", report.last_usable),
    ];
    if let Some(bits) = &report.address_binary {
        lines.push(ReportLine::plain("IP (binary)", bits));
    }
    if let Some(bits) = &report.mask_binary {
        lines.push(ReportLine::plain("Mask (binary)", bits));
    }
    lines
}

/// Pad `label:` to `width` so the values after it line up.
pub fn pad_label(label: &str, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:<width$}")
}

/// Format a label and value as one left-aligned line.
///
/// # Arguments
/// * `label` - The field name, a `:` is appended
/// * `value` - The value printed after the padded label
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    format!("{} {}", pad_label(label, width), value.to_string())
}

/// The report as plain text, one field per line.
pub fn render_text(report: &SubnetReport) -> String {
    report_lines(report)
        .into_iter()
        .map(|line| format_field(line.label, line.value, LABEL_WIDTH))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Write the report with bold labels and highlighted values.
pub fn write_report<W: Write>(writer: &mut W, report: &SubnetReport) -> io::Result<()> {
    writeln!(writer)?;
    for line in report_lines(report) {
        let value = match line.highlight {
            Highlight::Plain => line.value.normal(),
            Highlight::Good => line.value.green(),
            Highlight::Warn => line.value.yellow(),
        };
        writeln!(writer, "{} {}", pad_label(line.label, LABEL_WIDTH).bold(), value)?;
    }
    Ok(())
}

/// Print the report to stdout.
pub fn print_report(report: &SubnetReport) -> io::Result<()> {
    write_report(&mut io::stdout().lock(), report)
}
