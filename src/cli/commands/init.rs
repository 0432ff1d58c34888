use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (kept as-is unless `--force`)
///  - the upload and output directories
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = cli.config.clone().unwrap_or_else(Config::config_file);

    if path.exists() && !force {
        info(format!("Config file already present: {}", path.display()));
    } else {
        cfg.save(&path)?;
        success(format!("Config file: {}", path.display()));
    }

    cfg.ensure_dirs()?;
    success(format!("Upload dir:  {}", cfg.upload_path().display()));
    success(format!("Output dir:  {}", cfg.output_path().display()));

    Ok(())
}
