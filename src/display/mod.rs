//! Display formatting for terminal output
//!
//! Provides the cell formatters used by the row normaliser and the
//! terminal table renderer.

pub mod format;
pub mod table;

pub use crate::models::parse_float;
pub use format::{format_earnings, format_percent, format_ratio, MISSING_VALUE, ZERO_PERCENT};
pub use table::{format_column_list, render_table};
