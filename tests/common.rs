#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `attendlog` binary with isolated config, upload and output directories.
pub fn atl(ws: &Workspace) -> Command {
    let mut cmd = cargo_bin_cmd!("attendlog");
    cmd.env("NO_COLOR", "1")
        .env_remove("ATTENDLOG_LOG")
        .arg("--config")
        .arg(ws.config_file())
        .arg("--upload-dir")
        .arg(ws.uploads())
        .arg("--output-dir")
        .arg(ws.outputs());
    cmd
}

/// Scratch directory holding inputs, config and the upload/output dirs.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_file(&self) -> PathBuf {
        self.path().join("attendlog.conf")
    }

    pub fn uploads(&self) -> PathBuf {
        self.path().join("uploads")
    }

    pub fn outputs(&self) -> PathBuf {
        self.path().join("outputs")
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let p = self.path().join(name);
        fs::write(&p, content).expect("write input file");
        p
    }

    /// Files currently present in `dir` (empty if it does not exist).
    pub fn files_in(dir: &Path) -> Vec<PathBuf> {
        match fs::read_dir(dir) {
            Ok(rd) => rd.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
            Err(_) => Vec::new(),
        }
    }
}

pub const TWO_DAY_CSV: &str = "Device id,Log Date\n\
dev1,2024-01-02 08:00\n\
dev1,2024-01-01 17:30\n\
dev1,2024-01-01 09:00\n\
dev1,2024-01-02 15:15\n";

pub fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}
