use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::convert;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;

/// Handle the `convert` command: tab-delimited text → CSV.
///
/// Without `--output` the CSV lands in the output directory under a
/// request-scoped name; its path is printed on stdout.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        file,
        output,
        force,
    } = cmd
    {
        match output {
            Some(out) => {
                ensure_writable(out, *force)?;
                convert::convert_to(file, out)?;
                success(format!("CSV written: {}", out.display()));
            }
            None => {
                let path = convert::convert(file, &cfg.output_path(), &cfg.output_stem)?;
                success(format!("CSV written: {}", path.display()));
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}
