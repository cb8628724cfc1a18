//! Earnings amount for display
//!
//! Amounts come from free-form numeric strings in the source, so they are
//! kept as `f64` and only rounded when rendered.

use serde::Serialize;
use std::fmt;

/// Currency suffix appended when none is configured
pub const DEFAULT_CURRENCY: &str = "EUR";

/// A monetary figure for one month
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Earnings(f64);

impl Earnings {
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Format with two decimals followed by a currency suffix
    ///
    /// # Examples
    /// ```
    /// use workforce_table::models::Earnings;
    /// assert_eq!(Earnings::new(88.0).format_with_currency("EUR"), "88.00 EUR");
    /// ```
    pub fn format_with_currency(&self, currency: &str) -> String {
        format!("{} {}", self.fixed(), currency)
    }

    /// Two-decimal rendering that rounds exact halves away from zero
    fn fixed(&self) -> String {
        let value = self.0;
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }

        // A value sits exactly on a half cent only when it is an odd multiple
        // of 1/8; `{:.2}` would round those to even
        let eighths = value.abs() * 8.0;
        if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
            let cents = (value.abs() * 100.0 + 0.5).floor();
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{}{:.0}.{:02.0}", sign, (cents / 100.0).floor(), cents % 100.0);
        }

        // Normalise -0.0 so it never renders as "-0.00"
        format!("{:.2}", value + 0.0)
    }
}

impl fmt::Display for Earnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_currency(DEFAULT_CURRENCY))
    }
}
