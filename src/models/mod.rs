//! Core data models for workforce-table
//!
//! Input side: loosely-typed personnel records as they arrive from the source
//! document. Output side: column descriptors and formatted table rows.

pub mod earnings;
pub(crate) mod lenient;
pub mod record;
pub mod scalar;
pub mod table;

pub use earnings::{Earnings, DEFAULT_CURRENCY};
pub use record::{
    CostsByMonth, MonthlyCost, MonthlyRate, RawRecord, WorkerInfo, WorkerKind, WorkerSource,
    WorkforceUtilisation,
};
pub use scalar::{parse_float, Scalar};
pub use table::{
    ColumnDescriptor, MonthColumn, TableRow, NET_EARNINGS_KEY, PAST_12_MONTHS_KEY, PERSON_KEY,
    YTD_KEY,
};
