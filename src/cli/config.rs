//! CLI commands for viewing and changing settings

use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;

use crate::config::{Settings, WorkforcePaths};
use crate::error::{TableError, TableResult};

/// Settings subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print paths and effective settings
    Show,

    /// Change stored settings
    Set {
        /// Maximum number of month columns
        #[arg(short, long)]
        months: Option<usize>,

        /// Currency suffix for earnings
        #[arg(short, long)]
        currency: Option<String>,

        /// Records file used when none is given
        #[arg(long, conflicts_with = "clear_default_input")]
        default_input: Option<PathBuf>,

        /// Forget the stored default input
        #[arg(long)]
        clear_default_input: bool,
    },
}

/// Handle `config`; no subcommand prints the settings
pub fn handle_config_command(
    paths: &WorkforcePaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> TableResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            print_settings(paths, settings);
            Ok(())
        }
        ConfigCommands::Set {
            months,
            currency,
            default_input,
            clear_default_input,
        } => {
            let mut updated = settings.clone();
            if let Some(months) = months {
                updated.month_column_limit = months;
            }
            if let Some(currency) = currency {
                if currency.trim().is_empty() {
                    return Err(TableError::Validation("Currency cannot be empty".into()));
                }
                updated.currency = currency;
            }
            if let Some(path) = default_input {
                updated.default_input = Some(path);
            }
            if clear_default_input {
                updated.default_input = None;
            }

            updated.save(paths)?;
            info!(path = %paths.settings_file().display(), "settings saved");
            println!("Saved settings to: {}", paths.settings_file().display());
            Ok(())
        }
    }
}

fn print_settings(paths: &WorkforcePaths, settings: &Settings) {
    println!("Workforce Table Configuration");
    println!("=============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Month columns: {}", settings.month_column_limit);
    println!("  Currency:      {}", settings.currency);
    match &settings.default_input {
        Some(path) => println!("  Default input: {}", path.display()),
        None => println!("  Default input: (none)"),
    }
}
