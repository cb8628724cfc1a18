//! Row normalisation
//!
//! Turns one raw record into one [`TableRow`]. Normalisation never fails:
//! absent or malformed fields degrade to placeholders.

use tracing::{debug, warn};

use crate::display::{format_earnings, format_percent, MISSING_VALUE};
use crate::models::{Earnings, MonthColumn, MonthlyCost, RawRecord, TableRow};

use super::PipelineOptions;

/// Normalises records against a fixed set of month columns
pub struct RowNormalizer<'a> {
    months: &'a [MonthColumn],
    currency: &'a str,
}

impl<'a> RowNormalizer<'a> {
    /// Create a normaliser for the given month columns
    pub fn new(months: &'a [MonthColumn], options: &'a PipelineOptions) -> Self {
        Self {
            months,
            currency: &options.currency,
        }
    }

    /// Produce the table row for one record
    pub fn normalize(&self, record: &RawRecord) -> TableRow {
        if record.kind().is_none() {
            warn!("record has neither employee nor external info");
        }

        let mut row = TableRow {
            person: resolve_person(record),
            past12_months: format_percent(record.rate_last_twelve_months()),
            y2d: format_percent(record.rate_year_to_date()),
            months: Vec::with_capacity(self.months.len()),
            net_earnings_prev_month: format_earnings(latest_earnings(record), self.currency),
        };

        for month in self.months {
            row.set_month(month.key(), month_utilisation(record, month));
        }

        row
    }

    /// Produce one row per record, in input order
    pub fn normalize_all(&self, records: &[RawRecord]) -> Vec<TableRow> {
        let rows: Vec<TableRow> = records.iter().map(|r| self.normalize(r)).collect();
        debug!(rows = rows.len(), months = self.months.len(), "normalised records");
        rows
    }
}

/// The person's name, or the missing placeholder
pub fn resolve_person(record: &RawRecord) -> String {
    record
        .name()
        .map(|name| name.as_text())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Formatted utilisation for one month
///
/// The first breakdown entry whose label matches exactly wins. A record with
/// no entry for the month yields `"0%"`.
pub fn month_utilisation(record: &RawRecord, month: &MonthColumn) -> String {
    let rate = record
        .monthly_breakdown()
        .and_then(|entries| {
            entries
                .iter()
                .find(|entry| entry.month.as_deref() == Some(month.label()))
        })
        .and_then(|entry| entry.utilisation_rate.as_ref());

    format_percent(rate)
}

/// The entry with the lexically greatest month label
///
/// The first entry seeds the maximum; later entries replace it only when
/// strictly greater, so ties keep the earlier entry. An entry without a
/// label never compares greater and, when first, is never replaced.
pub fn latest_entry(entries: &[MonthlyCost]) -> Option<&MonthlyCost> {
    let (first, rest) = entries.split_first()?;

    Some(rest.iter().fold(first, |latest, entry| {
        match (entry.month.as_deref(), latest.month.as_deref()) {
            (Some(candidate), Some(current)) if candidate > current => entry,
            _ => latest,
        }
    }))
}

/// Earnings of the most recent month, if any can be parsed
pub fn latest_earnings(record: &RawRecord) -> Option<Earnings> {
    let entries = record.potential_earnings()?;
    let latest = latest_entry(entries)?;
    latest
        .costs
        .as_ref()
        .and_then(|costs| costs.parse_number())
        .map(Earnings::new)
}
