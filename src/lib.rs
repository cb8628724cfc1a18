//! workforce-table - Workforce utilisation table pipeline
//!
//! Converts personnel records, each describing either an employee or an
//! external worker, into uniform table rows for display.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Input records and output table structures
//! - `services`: Month discovery, column building, row normalisation
//! - `display`: Cell formatters and terminal table rendering
//! - `reports`: The assembled utilisation report
//! - `export`: JSON, YAML and CSV export
//! - `storage`: Record loading and JSON file helpers
//! - `config`: Path and settings management
//! - `cli`: Command handlers for the `wftable` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use workforce_table::reports::UtilisationReport;
//! use workforce_table::services::PipelineOptions;
//! use workforce_table::storage::parse_records;
//!
//! let records = parse_records(r#"[{"externalInfo": {"name": "Jane Doe"}}]"#).unwrap();
//! let report = UtilisationReport::generate(&records, &PipelineOptions::default());
//! assert_eq!(report.rows[0].person, "Jane Doe");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TableError, TableResult};
