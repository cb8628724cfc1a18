//! Column descriptor assembly

use crate::models::{
    ColumnDescriptor, MonthColumn, NET_EARNINGS_KEY, PAST_12_MONTHS_KEY, PERSON_KEY, YTD_KEY,
};

/// Build the ordered column list for a set of discovered months
///
/// Three fixed leading columns, one per month (key lowercased, header as in
/// the source), then the earnings column.
pub fn build_columns(months: &[MonthColumn]) -> Vec<ColumnDescriptor> {
    let leading = [
        ColumnDescriptor::new(PERSON_KEY, "Person"),
        ColumnDescriptor::new(PAST_12_MONTHS_KEY, "Past 12 Months"),
        ColumnDescriptor::new(YTD_KEY, "YTD"),
    ];
    let trailing = ColumnDescriptor::new(NET_EARNINGS_KEY, "Net Earnings Prev Month");

    leading
        .into_iter()
        .chain(months.iter().map(ColumnDescriptor::for_month))
        .chain(std::iter::once(trailing))
        .collect()
}
