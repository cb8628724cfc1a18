//! Record loading
//!
//! The source document is a JSON array of loosely-typed records. Only the
//! document as a whole can be rejected; every array element becomes a
//! [`RawRecord`], however malformed.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use super::file_io::read_json;
use crate::error::{TableError, TableResult};
use crate::models::RawRecord;

/// Convert a parsed JSON document into records
pub fn records_from_value(document: Value) -> TableResult<Vec<RawRecord>> {
    match document {
        Value::Array(items) => Ok(items.into_iter().map(RawRecord::from_value).collect()),
        other => Err(TableError::Storage(format!(
            "Expected a JSON array of records, found {}",
            json_type_name(&other)
        ))),
    }
}

/// Parse records from JSON text
pub fn parse_records(json: &str) -> TableResult<Vec<RawRecord>> {
    let document: Value = serde_json::from_str(json)?;
    records_from_value(document)
}

/// Load records from a JSON file
pub fn load_records<P: AsRef<Path>>(path: P) -> TableResult<Vec<RawRecord>> {
    let path = path.as_ref();
    let document: Value = read_json(path)?;
    let records = records_from_value(document)?;
    info!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkerKind;
    use tempfile::TempDir;

    #[test]
    fn test_parse_records() {
        let records = parse_records(
            r#"[
                {"employees": {"name": "Ada"}},
                {"externals": {"name": "Jane"}},
                {},
                null,
                42
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 5);
        assert_eq!(records[0].kind(), Some(WorkerKind::Employee));
        assert_eq!(records[1].kind(), Some(WorkerKind::External));
        assert!(records[2..].iter().all(|r| r.kind().is_none()));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_records(r#"{"employees": {}}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Storage error: Expected a JSON array of records, found an object"
        );
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(parse_records("[{"), Err(TableError::Json(_))));
    }

    #[test]
    fn test_load_records_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("source-data.json");
        std::fs::write(&path, r#"[{"employeeInfo": {"name": "Ada"}}]"#).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_records(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(TableError::Storage(_))));
    }
}
