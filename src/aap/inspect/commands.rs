//! Inspect command handler

use log::{debug, info};

use crate::aap::AapClient;
use crate::cli::Cli;
use crate::error::Result;
use crate::output::{export_to_json, output_report};
use crate::ui::{create_spinner, finish_spinner, set_spinner_message};

use super::OrganizationInspector;

/// Run the inspection for `cli.organization` and emit the report
pub async fn run_inspect_command(client: &AapClient, cli: &Cli) -> Result<()> {
    let text_mode = cli.output.is_text();

    if text_mode && !cli.batch {
        println!("Connecting to AAP at {}...", client.base_url());
    }

    let spinner = create_spinner(
        &format!("Looking up organization '{}'...", cli.organization),
        cli.quiet(),
    );

    let inspector = OrganizationInspector::new(client);
    let result = inspector.inspect(&cli.organization).await;
    set_spinner_message(&spinner, "Rendering report...");
    finish_spinner(spinner);

    let report = result?;
    debug!(
        "Inspection of '{}' produced {} sections, {} errors",
        report.organization.name,
        report.sections.len(),
        report.error_count()
    );

    output_report(&report, &cli.output);

    if let Some(path) = &cli.export {
        export_to_json(&report, path)?;
        if text_mode {
            println!("\nData exported to: {}", path.display());
        } else {
            info!("Data exported to: {}", path.display());
        }
    }

    if text_mode {
        let rule = "=".repeat(80);
        println!("\n{}", rule);
        println!("Inspection complete!");
        println!("{}", rule);
    }

    if report.error_count() > 0 {
        info!("Completed with {} errors", report.error_count());
    } else {
        info!("Completed successfully");
    }

    Ok(())
}
