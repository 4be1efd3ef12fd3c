//! Output formatting module
//!
//! Renders an inspection report as text, JSON or YAML, and exports it.

mod common;
mod export;
mod report;

use crate::aap::inspect::InspectionReport;
use crate::cli::OutputFormat;

pub use self::common::{display_value, print_json, print_yaml};
pub use self::export::export_to_json;
pub use self::report::{output_text, render_report, summary_table};

/// Output a report in the requested format
pub fn output_report(report: &InspectionReport, format: &OutputFormat) {
    match format {
        OutputFormat::Text => output_text(report),
        OutputFormat::Json => print_json(&report.export_document()),
        OutputFormat::Yaml => print_yaml(&report.export_document()),
    }
}
