//! Month discovery
//!
//! Collects the month labels present in any record's utilisation breakdown
//! and picks the ones that become dynamic table columns.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{MonthColumn, RawRecord};

/// Number of month columns shown when not configured otherwise
pub const DEFAULT_MONTH_LIMIT: usize = 3;

/// Discover up to `limit` distinct month labels
///
/// Labels are taken in dataset traversal order (records in input order, then
/// breakdown entries in list order), deduplicated by first occurrence. They
/// are not sorted chronologically. Records without a breakdown contribute
/// nothing.
pub fn discover_months(records: &[RawRecord], limit: usize) -> Vec<MonthColumn> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut months = Vec::new();

    let labels = records
        .iter()
        .filter_map(RawRecord::monthly_breakdown)
        .flatten()
        .filter_map(|entry| entry.month.as_deref());

    for label in labels {
        if months.len() >= limit {
            break;
        }
        if seen.insert(label) {
            months.push(MonthColumn::new(label));
        }
    }

    debug!(
        count = months.len(),
        months = ?months.iter().map(MonthColumn::label).collect::<Vec<_>>(),
        "discovered month columns"
    );

    months
}
