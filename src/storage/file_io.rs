//! JSON file helpers
//!
//! Parse and serialise failures convert into [`TableError::Json`] through
//! `?`. Writes go to a sibling temp file that replaces the target on success.

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{TableError, TableResult};

/// Read and deserialize a JSON file that must exist
pub fn read_json<T: DeserializeOwned>(path: &Path) -> TableResult<T> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TableError::Storage(format!("File not found: {}", path.display())),
        _ => TableError::Io(format!("Failed to open {}: {}", path.display(), e)),
    })?;

    let value = serde_json::from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), "read JSON file");
    Ok(value)
}

/// Like [`read_json`], but a missing file yields `T::default()`
pub fn read_json_or_default<T>(path: &Path) -> TableResult<T>
where
    T: DeserializeOwned + Default,
{
    if path.exists() {
        read_json(path)
    } else {
        Ok(T::default())
    }
}

/// Serialize `data` as pretty JSON and replace `path` with it
pub fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> TableResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut contents = serde_json::to_string_pretty(data)?;
    contents.push('\n');

    let temp_path = path.with_extension("json.tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(TableError::Storage(format!(
            "Failed to replace {}: {}",
            path.display(),
            e
        )));
    }

    debug!(path = %path.display(), bytes = contents.len(), "wrote JSON file");
    Ok(())
}
