//! YAML Export functionality
//!
//! Exports a utilisation report to YAML for human-readable review.

use std::io::Write;

use crate::error::{TableError, TableResult};
use crate::export::json::ReportExport;
use crate::reports::UtilisationReport;

/// Export a report to YAML format
pub fn export_report_yaml<W: Write>(report: &UtilisationReport, writer: &mut W) -> TableResult<()> {
    let export = ReportExport::from_report(report);

    // Add a header comment
    writeln!(writer, "# Workforce Utilisation Export")
        .map_err(|e| TableError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.generated_at)
        .map_err(|e| TableError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| TableError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TableError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TableError::Export(e.to_string()))?;

    Ok(())
}
