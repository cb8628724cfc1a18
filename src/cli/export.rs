//! CLI command for report export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::InputArgs;
use crate::config::Settings;
use crate::error::{TableError, TableResult};
use crate::export::{write_report, ExportFormat};
use crate::reports::UtilisationReport;

/// Generate the report and write it to `output`
pub fn handle_export_command(
    settings: &Settings,
    args: &InputArgs,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> TableResult<()> {
    let records = args.load(settings)?;
    let report = UtilisationReport::generate(&records, &args.pipeline_options(settings));

    let file = File::create(output).map_err(|e| {
        TableError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    write_report(&report, format, &mut writer, pretty)?;
    writer
        .flush()
        .map_err(|e| TableError::Export(e.to_string()))?;

    info!(path = %output.display(), ?format, "export written");
    println!(
        "Exported {} rows to: {}",
        report.rows.len(),
        output.display()
    );

    Ok(())
}
