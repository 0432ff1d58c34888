//! attendlog library root.
//! Exposes the CLI parser, the high-level run() function, the delimiter
//! converter and the attendance aggregator.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::aggregate::aggregate;
pub use crate::core::convert::convert;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging diagnostico
    logging::init(cli.verbose);

    // 3️⃣ carica config UNA sola volta
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 4️⃣ override delle directory da riga di comando
    if let Some(dir) = &cli.output_dir {
        cfg.output_dir = dir.clone();
    }
    if let Some(dir) = &cli.upload_dir {
        cfg.upload_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
