//! CLI commands for viewing the utilisation table

use tracing::info;

use super::InputArgs;
use crate::config::Settings;
use crate::display::format_column_list;
use crate::error::TableResult;
use crate::reports::UtilisationReport;
use crate::services::{build_columns, discover_months};

/// Print the utilisation table to the terminal
pub fn handle_show_command(settings: &Settings, args: &InputArgs) -> TableResult<()> {
    let records = args.load(settings)?;
    let options = args.pipeline_options(settings);

    let report = UtilisationReport::generate(&records, &options);
    info!(rows = report.rows.len(), "rendering table");

    print!("{}", report.format_terminal());
    Ok(())
}

/// Print the column descriptors, one `key<TAB>label` per line
pub fn handle_columns_command(settings: &Settings, args: &InputArgs) -> TableResult<()> {
    let records = args.load(settings)?;
    let options = args.pipeline_options(settings);

    let months = discover_months(&records, options.month_limit);
    println!("{}", format_column_list(&build_columns(&months)));
    Ok(())
}
