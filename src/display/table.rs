//! Terminal table rendering
//!
//! Renders column descriptors and rows as a boxed text table.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::{ColumnDescriptor, TableRow};

/// Render rows under the given columns
///
/// Headers are the display labels; cells are looked up by column key.
pub fn render_table(columns: &[ColumnDescriptor], rows: &[TableRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.display_label.clone()));

    for row in rows {
        builder.push_record(row.cells(columns).into_iter().map(str::to_string));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Format a one-line `key<TAB>label` listing of columns
pub fn format_column_list(columns: &[ColumnDescriptor]) -> String {
    columns
        .iter()
        .map(|c| format!("{}\t{}", c.key, c.display_label))
        .collect::<Vec<_>>()
        .join("\n")
}
