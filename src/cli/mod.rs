//! CLI command handlers
//!
//! Bridges clap argument parsing with the report pipeline.

pub mod config;
pub mod export;
pub mod report;

pub use config::{handle_config_command, ConfigCommands};
pub use export::handle_export_command;
pub use report::{handle_columns_command, handle_show_command};

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{TableError, TableResult};
use crate::models::RawRecord;
use crate::services::PipelineOptions;
use crate::storage::load_records;

/// Input selection and pipeline overrides shared by every report command
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Records file (JSON array); defaults to the configured input
    pub file: Option<PathBuf>,

    /// Maximum number of month columns
    #[arg(short, long)]
    pub months: Option<usize>,

    /// Currency suffix for earnings
    #[arg(short, long)]
    pub currency: Option<String>,
}

impl InputArgs {
    /// The records file to read, from the command line or settings
    pub fn input_path(&self, settings: &Settings) -> TableResult<PathBuf> {
        self.file
            .clone()
            .or_else(|| settings.default_input.clone())
            .ok_or_else(|| {
                TableError::Validation(
                    "No input file given and no default_input configured".into(),
                )
            })
    }

    /// Pipeline options with command-line overrides applied
    pub fn pipeline_options(&self, settings: &Settings) -> PipelineOptions {
        let mut options = settings.pipeline_options();
        if let Some(months) = self.months {
            options.month_limit = months;
        }
        if let Some(currency) = &self.currency {
            options.currency = currency.clone();
        }
        options
    }

    /// Load the selected records
    pub fn load(&self, settings: &Settings) -> TableResult<Vec<RawRecord>> {
        load_records(self.input_path(settings)?)
    }
}
