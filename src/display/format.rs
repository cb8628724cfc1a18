//! Cell formatters
//!
//! Every formatter is total: missing or unparseable input yields a fixed
//! placeholder instead of an error.

use crate::models::{Earnings, Scalar};

/// Placeholder for a missing name or earnings figure (en dash)
pub const MISSING_VALUE: &str = "\u{2013}";

/// Placeholder for a missing, zero or unparseable ratio
pub const ZERO_PERCENT: &str = "0%";

/// Format a ratio scalar as a whole percentage
///
/// Absent values, text that does not parse, and zero all render as `"0%"`.
pub fn format_percent(value: Option<&Scalar>) -> String {
    match value.and_then(Scalar::to_number) {
        Some(ratio) => format_ratio(ratio),
        None => ZERO_PERCENT.to_string(),
    }
}

/// Format a ratio as a whole percentage, rounding halves upward
///
/// # Examples
/// ```
/// use workforce_table::display::format_ratio;
/// assert_eq!(format_ratio(0.4567), "46%");
/// assert_eq!(format_ratio(0.005), "1%");
/// ```
pub fn format_ratio(ratio: f64) -> String {
    if ratio == 0.0 || ratio.is_nan() {
        return ZERO_PERCENT.to_string();
    }

    let scaled = ratio * 100.0;
    if scaled.is_infinite() {
        return if scaled > 0.0 { "Infinity%" } else { "-Infinity%" }.to_string();
    }

    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    // -0.0 + 0.0 is +0.0
    format!("{:.0}%", rounded + 0.0)
}

/// Format the latest earnings figure, or the missing placeholder
pub fn format_earnings(earnings: Option<Earnings>, currency: &str) -> String {
    match earnings {
        Some(amount) => amount.format_with_currency(currency),
        None => MISSING_VALUE.to_string(),
    }
}
