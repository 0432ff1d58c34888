use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::storage::write_unique;
use crate::errors::AppResult;
use crate::export::{self, ensure_writable};

/// Handle the `summary` command.
///
/// Text formats go to stdout unless `--output` is given; XLSX always
/// goes to a file (the output directory when no path is given).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        file,
        format,
        output,
        force,
    } = cmd
    {
        let result = Core::summarize_file(file, cfg)?;

        if let Some(out) = output {
            ensure_writable(out, *force)?;
            return export::write_summary(&result, *format, out);
        }

        match export::render(&result, *format)? {
            Some(text) => print!("{text}"),
            None => {
                let path = write_unique(
                    &cfg.output_path(),
                    &cfg.output_stem,
                    format.extension(),
                    |path, file| {
                        // the exporter opens the path itself
                        drop(file);
                        export::write_summary(&result, *format, path)
                    },
                )?;
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}
