//! JSON Export functionality
//!
//! Exports a utilisation report with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{TableError, TableResult};
use crate::models::{ColumnDescriptor, TableRow};
use crate::reports::{ReportSummary, UtilisationReport};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub columns: &'a [ColumnDescriptor],

    pub rows: &'a [TableRow],

    pub summary: ReportSummary,
}

impl<'a> ReportExport<'a> {
    /// Wrap a report for export, stamped with the current time
    pub fn from_report(report: &'a UtilisationReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            columns: &report.columns,
            rows: &report.rows,
            summary: report.summary,
        }
    }
}

/// Export a report to JSON
pub fn export_report_json<W: Write>(
    report: &UtilisationReport,
    writer: &mut W,
    pretty: bool,
) -> TableResult<()> {
    let export = ReportExport::from_report(report);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TableError::Export(e.to_string()))?;

    Ok(())
}
