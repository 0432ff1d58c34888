//! Request-scoped file names for staged uploads and generated outputs.
//!
//! Every name carries a microsecond timestamp and the process id, and the
//! file is created with create-new semantics: two invocations sharing the
//! same directories never write to the same file.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const MAX_ATTEMPTS: u32 = 100;

/// Create a new, empty file `<stem>-<timestamp>-<pid>[-n].<ext>` in `dir`.
pub fn create_unique(dir: &Path, stem: &str, ext: &str) -> AppResult<(PathBuf, File)> {
    fs::create_dir_all(dir)?;

    let base = format!(
        "{}-{}-{}",
        stem,
        Local::now().format("%Y%m%d%H%M%S%6f"),
        std::process::id()
    );

    for n in 0..MAX_ATTEMPTS {
        let name = if n == 0 {
            format!("{base}.{ext}")
        } else {
            format!("{base}-{n}.{ext}")
        };
        let path = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                tracing::debug!(path = %path.display(), "created request-scoped file");
                return Ok((path, file));
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(AppError::Io(e)),
        }
    }

    Err(AppError::Io(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("could not allocate a unique file name in {}", dir.display()),
    )))
}

/// Create a request-scoped file and hand it to `write`.
///
/// When `write` fails the file is removed again; the caller never leaves
/// an empty or half-written file behind.
pub fn write_unique<F>(dir: &Path, stem: &str, ext: &str, write: F) -> AppResult<PathBuf>
where
    F: FnOnce(&Path, File) -> AppResult<()>,
{
    let (path, file) = create_unique(dir, stem, ext)?;

    if let Err(e) = write(&path, file) {
        if let Err(rm) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), error = %rm, "could not remove partial file");
        }
        return Err(e);
    }

    Ok(path)
}

/// Copy an incoming file into `upload_dir` under a request-scoped name,
/// keeping its extension. The caller removes the staged copy when done.
pub fn stage_upload(src: &Path, upload_dir: &Path) -> AppResult<PathBuf> {
    let stem = src
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());
    let ext = crate::utils::path::extension(src).unwrap_or_default();

    let mut input = File::open(src)?;
    write_unique(upload_dir, &stem, &ext, |_, mut file| {
        io::copy(&mut input, &mut file)?;
        Ok(())
    })
}

/// Remove a staged upload; a failure is only logged.
pub fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "could not remove staged file");
    }
}
