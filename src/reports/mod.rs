//! Reports module for workforce-table
//!
//! Assembles the finished utilisation table from a record sequence.

pub mod utilisation;

pub use utilisation::{ReportSummary, UtilisationReport};
