//! Output table structures
//!
//! A table is an ordered list of [`ColumnDescriptor`]s plus one [`TableRow`]
//! per input record. Rows carry formatted strings only; the presentation layer
//! never recomputes anything.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Key of the person column
pub const PERSON_KEY: &str = "person";
/// Key of the trailing twelve months column
pub const PAST_12_MONTHS_KEY: &str = "past12Months";
/// Key of the year-to-date column
pub const YTD_KEY: &str = "y2d";
/// Key of the latest earnings column
pub const NET_EARNINGS_KEY: &str = "netEarningsPrevMonth";

/// A month label selected as a dynamic table column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthColumn {
    label: String,
}

impl MonthColumn {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The label as it appears in the source, used as the column header
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Row key for this month: the label lowercased
    pub fn key(&self) -> String {
        self.label.to_lowercase()
    }
}

/// Describes one column for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Row key holding this column's cell value
    pub key: String,
    /// Header text
    pub display_label: String,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_label: display_label.into(),
        }
    }

    pub fn for_month(month: &MonthColumn) -> Self {
        Self::new(month.key(), month.label())
    }
}

/// One normalised output row
///
/// Serializes as a flat object: `person`, `past12Months`, `y2d`, then the
/// month keys in discovery order, then `netEarningsPrevMonth`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    pub person: String,
    pub past12_months: String,
    pub y2d: String,
    /// `(key, formatted rate)` pairs in column order, keys unique
    pub months: Vec<(String, String)>,
    pub net_earnings_prev_month: String,
}

impl TableRow {
    /// Set a month cell, overwriting in place when the key already exists
    pub fn set_month(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.months.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.months.push((key, value)),
        }
    }

    /// Look up a cell by column key
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            PERSON_KEY => Some(&self.person),
            PAST_12_MONTHS_KEY => Some(&self.past12_months),
            YTD_KEY => Some(&self.y2d),
            NET_EARNINGS_KEY => Some(&self.net_earnings_prev_month),
            _ => self
                .months
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
        }
    }

    /// Cells in the order of the given columns; unknown keys are empty
    pub fn cells<'a>(&'a self, columns: &[ColumnDescriptor]) -> Vec<&'a str> {
        columns
            .iter()
            .map(|column| self.get(&column.key).unwrap_or(""))
            .collect()
    }
}

impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4 + self.months.len()))?;
        map.serialize_entry(PERSON_KEY, &self.person)?;
        map.serialize_entry(PAST_12_MONTHS_KEY, &self.past12_months)?;
        map.serialize_entry(YTD_KEY, &self.y2d)?;
        for (key, value) in &self.months {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(NET_EARNINGS_KEY, &self.net_earnings_prev_month)?;
        map.end()
    }
}
