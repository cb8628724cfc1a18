//! User settings for workforce-table
//!
//! Persisted preferences for the pipeline: how many month columns to show,
//! the currency suffix, and a default input document.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::WorkforcePaths;
use crate::error::TableError;
use crate::models::DEFAULT_CURRENCY;
use crate::services::{PipelineOptions, DEFAULT_MONTH_LIMIT};
use crate::storage::{read_json_or_default, write_json_atomic};

/// User settings for workforce-table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of month columns
    #[serde(default = "default_month_column_limit")]
    pub month_column_limit: usize,

    /// Currency suffix for earnings
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Records file used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_input: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_month_column_limit() -> usize {
    DEFAULT_MONTH_LIMIT
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            month_column_limit: default_month_column_limit(),
            currency: default_currency(),
            default_input: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &WorkforcePaths) -> Result<Self, TableError> {
        // Missing file yields defaults; nothing is written until `save`
        let settings_path = paths.settings_file();
        read_json_or_default(&settings_path).map_err(|e| {
            TableError::Config(format!(
                "Failed to load settings from {}: {}",
                settings_path.display(),
                e
            ))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WorkforcePaths) -> Result<(), TableError> {
        paths.ensure_directories()?;
        write_json_atomic(&paths.settings_file(), self)
    }

    /// Pipeline parameters derived from these settings
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            month_limit: self.month_column_limit,
            currency: self.currency.clone(),
        }
    }
}
