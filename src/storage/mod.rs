//! Storage layer for workforce-table
//!
//! Loads the input record document and persists small JSON files with
//! atomic writes.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use records::{load_records, parse_records, records_from_value};
