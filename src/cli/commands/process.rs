use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::convert;
use crate::core::logic::{Core, Route};
use crate::core::storage::{discard, stage_upload, write_unique};
use crate::errors::AppResult;
use crate::export::{SummaryFormat, render_html, render_table};
use crate::ui::messages::success;
use std::io::Write;
use std::path::Path;

/// Handle the `process` command, the upload route.
///
/// The file type is checked first, then the file is staged in the upload
/// directory and routed: `.txt` → CSV conversion, `.csv` → HTML summary.
/// The staged copy is removed whatever the outcome.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process { file } = cmd {
        let route = Core::route_for(file)?;
        let staged = stage_upload(file, &cfg.upload_path())?;

        let outcome = run_route(route, &staged, cfg);
        discard(&staged);
        outcome?;
    }
    Ok(())
}

fn run_route(route: Route, staged: &Path, cfg: &Config) -> AppResult<()> {
    let output_dir = cfg.output_path();

    match route {
        Route::Convert => {
            let path = convert::convert(staged, &output_dir, &cfg.output_stem)?;
            success(format!("CSV ready for download: {}", path.display()));
            println!("{}", path.display());
        }
        Route::Summary => {
            let result = Core::summarize_file(staged, cfg)?;

            let path = write_unique(
                &output_dir,
                &cfg.output_stem,
                SummaryFormat::Html.extension(),
                |_, mut file| {
                    file.write_all(render_html(&result).as_bytes())?;
                    Ok(())
                },
            )?;

            print!("{}", render_table(&result));
            success(format!("HTML summary: {}", path.display()));
        }
    }
    Ok(())
}
