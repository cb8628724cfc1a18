use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use workforce_table::cli::{
    handle_columns_command, handle_config_command, handle_export_command, handle_show_command,
    ConfigCommands, InputArgs,
};
use workforce_table::config::{Settings, WorkforcePaths};
use workforce_table::export::ExportFormat;

#[derive(Parser)]
#[command(
    name = "wftable",
    version,
    about = "Workforce utilisation table",
    long_about = "Normalises employee and external worker records into a utilisation \
                  table: trailing and year-to-date rates, the most recent months, \
                  and the latest potential earnings per person."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the utilisation table
    #[command(alias = "table")]
    Show(InputArgs),

    /// List the table columns as key and header
    Columns(InputArgs),

    /// Write the table to a file
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for table output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = WorkforcePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Show(args)) => handle_show_command(&settings, &args)?,
        Some(Commands::Columns(args)) => handle_columns_command(&settings, &args)?,
        Some(Commands::Export {
            input,
            output,
            format,
            pretty,
        }) => handle_export_command(&settings, &input, &output, format, pretty)?,
        Some(Commands::Config { action }) => handle_config_command(&paths, &settings, action)?,
        None => {
            println!("wftable - Workforce utilisation table");
            println!();
            println!("Run 'wftable --help' for usage information.");
            println!("Run 'wftable show <FILE>' to print a table.");
        }
    }

    Ok(())
}
