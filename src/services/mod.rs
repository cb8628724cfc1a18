//! Service layer for workforce-table
//!
//! The three pipeline stages, applied in order over one record sequence:
//! month discovery, column building, and row normalisation. All of them are
//! pure functions of their inputs.

pub mod columns;
pub mod discovery;
pub mod normalize;

pub use columns::build_columns;
pub use discovery::{discover_months, DEFAULT_MONTH_LIMIT};
pub use normalize::{latest_earnings, latest_entry, month_utilisation, resolve_person, RowNormalizer};

use crate::models::DEFAULT_CURRENCY;

/// Parameters of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Maximum number of month columns
    pub month_limit: usize,
    /// Suffix appended to earnings figures
    pub currency: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            month_limit: DEFAULT_MONTH_LIMIT,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
