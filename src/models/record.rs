//! Raw personnel records
//!
//! Each record describes either an employee or an external worker. The two
//! payloads share one shape, [`WorkerInfo`]. Fields are read through
//! [`RawRecord::resolve`], which checks the employee payload first and falls
//! back to the external one, so callers never repeat the fallback chain.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::lenient;
use super::Scalar;

/// Which kind of worker a payload describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerKind {
    Employee,
    External,
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerKind::Employee => write!(f, "Employee"),
            WorkerKind::External => write!(f, "External"),
        }
    }
}

/// One utilisation entry in a monthly breakdown
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRate {
    #[serde(default, deserialize_with = "lenient::text")]
    pub month: Option<String>,

    #[serde(default, deserialize_with = "lenient::scalar")]
    pub utilisation_rate: Option<Scalar>,
}

/// Aggregate and per-month utilisation ratios
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceUtilisation {
    /// Trailing twelve month ratio
    #[serde(
        default,
        alias = "utilisationRateLastTwelveMonths",
        deserialize_with = "lenient::scalar"
    )]
    pub rate_last_twelve_months: Option<Scalar>,

    /// Year-to-date ratio
    #[serde(
        default,
        alias = "utilisationRateYearToDate",
        deserialize_with = "lenient::scalar"
    )]
    pub rate_year_to_date: Option<Scalar>,

    /// Per-month ratios, unordered
    #[serde(
        default,
        alias = "lastThreeMonthsIndividually",
        deserialize_with = "lenient::list"
    )]
    pub monthly_breakdown: Option<Vec<MonthlyRate>>,
}

/// Potential earnings for a single month
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonthlyCost {
    /// Lexically sortable month label, e.g. "2024-05"
    #[serde(default, deserialize_with = "lenient::text")]
    pub month: Option<String>,

    #[serde(default, deserialize_with = "lenient::scalar")]
    pub costs: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostsByMonth {
    #[serde(default, deserialize_with = "lenient::list")]
    pub potential_earnings_by_month: Option<Vec<MonthlyCost>>,
}

/// Payload shared by employee and external records
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerInfo {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub name: Option<Scalar>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub workforce_utilisation: Option<WorkforceUtilisation>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub costs_by_month: Option<CostsByMonth>,
}

/// A payload together with the kind of worker it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkerSource<'a> {
    Employee(&'a WorkerInfo),
    External(&'a WorkerInfo),
}

impl<'a> WorkerSource<'a> {
    pub fn info(&self) -> &'a WorkerInfo {
        match self {
            Self::Employee(info) | Self::External(info) => info,
        }
    }

    pub fn kind(&self) -> WorkerKind {
        match self {
            Self::Employee(_) => WorkerKind::Employee,
            Self::External(_) => WorkerKind::External,
        }
    }
}

/// A single input record
///
/// Normally exactly one of `employee_info` / `external_info` is present.
/// Records with neither are valid and produce placeholder rows.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default, alias = "employees", deserialize_with = "lenient::object")]
    pub employee_info: Option<WorkerInfo>,

    #[serde(default, alias = "externals", deserialize_with = "lenient::object")]
    pub external_info: Option<WorkerInfo>,
}

impl RawRecord {
    /// Build a record from an arbitrary JSON value
    ///
    /// Never fails: anything that is not an object becomes an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Present payloads, employee first
    pub fn sources(&self) -> impl Iterator<Item = WorkerSource<'_>> {
        self.employee_info
            .iter()
            .map(WorkerSource::Employee)
            .chain(self.external_info.iter().map(WorkerSource::External))
    }

    /// The payload that classifies this record
    pub fn primary(&self) -> Option<WorkerSource<'_>> {
        self.sources().next()
    }

    pub fn kind(&self) -> Option<WorkerKind> {
        self.primary().map(|source| source.kind())
    }

    /// Read a field from the first payload that has it
    pub fn resolve<'a, T, F>(&'a self, field: F) -> Option<T>
    where
        F: Fn(&'a WorkerInfo) -> Option<T>,
    {
        self.sources().find_map(|source| field(source.info()))
    }

    pub fn name(&self) -> Option<&Scalar> {
        self.resolve(|info| info.name.as_ref())
    }

    pub fn rate_last_twelve_months(&self) -> Option<&Scalar> {
        self.resolve(|info| info.workforce_utilisation.as_ref()?.rate_last_twelve_months.as_ref())
    }

    pub fn rate_year_to_date(&self) -> Option<&Scalar> {
        self.resolve(|info| info.workforce_utilisation.as_ref()?.rate_year_to_date.as_ref())
    }

    pub fn monthly_breakdown(&self) -> Option<&[MonthlyRate]> {
        self.resolve(|info| info.workforce_utilisation.as_ref()?.monthly_breakdown.as_deref())
    }

    pub fn potential_earnings(&self) -> Option<&[MonthlyCost]> {
        self.resolve(|info| info.costs_by_month.as_ref()?.potential_earnings_by_month.as_deref())
    }
}
