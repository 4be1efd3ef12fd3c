//! JSON export of an inspection report

use log::debug;
use std::fs;
use std::path::Path;

use crate::aap::inspect::InspectionReport;
use crate::error::{AapError, Result};

/// Write the report as indented JSON to `path`
pub fn export_to_json(report: &InspectionReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&report.export_document())?;
    debug!("Writing {} bytes to {}", json.len(), path.display());

    fs::write(path, json + "\n")
        .map_err(|e| AapError::Io(format!("Could not write {}: {}", path.display(), e)))
}
