use crate::export::SummaryFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for attendlog
/// Convert punch logs to CSV and summarize worked hours per day
#[derive(Parser)]
#[command(
    name = "attendlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert attendance punch logs to CSV and summarize worked hours per day",
    long_about = None
)]
pub struct Cli {
    /// Use a specific configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the directory where generated files are written
    #[arg(global = true, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Override the directory where incoming files are staged
    #[arg(global = true, long = "upload-dir", value_name = "DIR")]
    pub upload_dir: Option<String>,

    /// Enable debug logging (ATTENDLOG_LOG takes precedence)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the upload/output directories
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Convert a tab-delimited text log into CSV
    Convert {
        /// Tab-delimited input file (first line is the header)
        file: PathBuf,

        #[arg(
            long,
            short = 'o',
            value_name = "FILE",
            help = "Write to this file instead of a new file in the output directory"
        )]
        output: Option<PathBuf>,

        #[arg(long, short = 'f', help = "Overwrite the output file without confirmation")]
        force: bool,
    },

    /// Summarize worked hours per day from a punch log (.csv or .txt)
    Summary {
        /// Punch log with a "Log Date" column
        file: PathBuf,

        #[arg(long, value_enum, default_value = "table")]
        format: SummaryFormat,

        #[arg(long, short = 'o', value_name = "FILE", help = "Write the summary to this file")]
        output: Option<PathBuf>,

        #[arg(long, short = 'f', help = "Overwrite the output file without confirmation")]
        force: bool,
    },

    /// Handle an uploaded file: .txt is converted to CSV, .csv is summarized to HTML
    Process {
        /// Uploaded file
        file: PathBuf,
    },
}
