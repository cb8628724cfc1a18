//! Export module for workforce-table
//!
//! Writes a finished report in one of several formats:
//! - CSV: display table, spreadsheet-compatible
//! - JSON: columns and rows for machine consumption
//! - YAML: the same document, human-readable

pub mod json;
pub mod yaml;

use clap::ValueEnum;
use std::io::Write;

use crate::error::TableResult;
use crate::reports::UtilisationReport;

pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV table with display headers
    Csv,
    /// JSON document (columns, rows, summary)
    Json,
    /// YAML document, human-readable
    Yaml,
}

/// Write a report in the requested format
///
/// `pretty` only affects JSON.
pub fn write_report<W: Write>(
    report: &UtilisationReport,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> TableResult<()> {
    match format {
        ExportFormat::Csv => report.export_csv(writer),
        ExportFormat::Json => export_report_json(report, writer, pretty),
        ExportFormat::Yaml => export_report_yaml(report, writer),
    }
}
