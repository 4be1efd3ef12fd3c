//! Human-readable inspection summary

use comfy_table::{presets::NOTHING, Table};
use std::io::{self, Write};

use crate::aap::inspect::{CredentialFinding, InspectionReport, SectionOutcome};
use crate::config::{api, DETAIL_FIELDS};

use super::common::display_value;

const RULE_WIDTH: usize = 80;

/// Write the full text summary for a report
pub fn render_report<W: Write>(report: &InspectionReport, out: &mut W) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out, "\n{}", heavy)?;
    writeln!(out, "ORGANIZATION DETAILS: {}", report.organization.name)?;
    writeln!(out, "{}\n", heavy)?;

    writeln!(out, "Basic Information:")?;
    writeln!(out, "{}", light)?;
    for field in DETAIL_FIELDS {
        if let Some(value) = report.raw.get(*field) {
            writeln!(out, "  {:.<30} {}", field, display_value(value))?;
        }
    }
    writeln!(out)?;

    writeln!(out, "DEPENDENCIES & RELATED RESOURCES:")?;
    writeln!(out, "{}", light)?;

    for section in &report.sections {
        writeln!(out, "\n{}:", section.kind)?;
        match &section.outcome {
            SectionOutcome::Fetched { count, .. } => {
                writeln!(out, "  Count: {}", count)?;
                if let Some(items) = report.dependencies.get(section.kind) {
                    for item in items {
                        writeln!(out, "    - [{}] {}", item.display_id(), item.name)?;
                    }
                    let limit = api::PREVIEW_LIMIT as u64;
                    if *count > limit {
                        writeln!(out, "    ... and {} more", count - limit)?;
                    }
                }
            }
            SectionOutcome::Failed(message) => {
                writeln!(out, "  Error retrieving {}: {}", section.kind, message)?;
            }
        }
    }

    if let Some(findings) = &report.credential_findings {
        writeln!(
            out,
            "\nChecking credentials for cross-organization dependencies..."
        )?;
        for finding in findings {
            match finding {
                CredentialFinding::CrossOrg {
                    credential,
                    organization_id,
                } => writeln!(
                    out,
                    "  ⚠️  Credential '{}' belongs to different organization (ID: {})",
                    credential.name, organization_id
                )?,
                CredentialFinding::Failed {
                    credential,
                    message,
                } => writeln!(
                    out,
                    "  Error checking credential {}: {}",
                    credential.display_id(),
                    message
                )?,
            }
        }
    }

    writeln!(out)
}

/// Build a compact count table over every fetched resource type
pub fn summary_table(report: &InspectionReport) -> Option<Table> {
    if report.sections.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Resource", "Count", "Previewed", "Status"]);

    for section in &report.sections {
        let previewed = report
            .dependencies
            .get(section.kind)
            .map_or(0, |items| items.len());
        let (count, status) = match &section.outcome {
            SectionOutcome::Fetched { count, more_pages } => (
                count.to_string(),
                if *more_pages { "first page only" } else { "ok" },
            ),
            SectionOutcome::Failed(_) => ("-".to_string(), "error"),
        };
        table.add_row(vec![
            section.kind.label().to_string(),
            count,
            previewed.to_string(),
            status.to_string(),
        ]);
    }

    let cross_org = report.dependencies.cross_org_credentials().len();
    if cross_org > 0 {
        table.add_row(vec![
            "Cross-org Credentials".to_string(),
            cross_org.to_string(),
            cross_org.to_string(),
            "warning".to_string(),
        ]);
    }

    Some(table)
}

/// Print the text summary and the count table to stdout
pub fn output_text(report: &InspectionReport) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = render_report(report, &mut out) {
        eprintln!("Error writing report: {}", e);
        return;
    }
    if let Some(table) = summary_table(report) {
        println!("Summary:\n{table}");
    }
}
