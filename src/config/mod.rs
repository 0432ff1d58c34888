use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Where incoming files are staged before processing
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Where converted CSV files and rendered summaries are written
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Header of the timestamp column
    #[serde(default = "default_log_date_column")]
    pub log_date_column: String,
    /// Header of the device / person id column (first other column if unset)
    #[serde(default)]
    pub identifier_column: Option<String>,
    /// Base name of generated files
    #[serde(default = "default_output_stem")]
    pub output_stem: String,
}

fn default_upload_dir() -> String {
    Config::config_dir()
        .join("uploads")
        .to_string_lossy()
        .to_string()
}
fn default_output_dir() -> String {
    Config::config_dir()
        .join("outputs")
        .to_string_lossy()
        .to_string()
}
fn default_log_date_column() -> String {
    "Log Date".to_string()
}
fn default_output_stem() -> String {
    "Attendance".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            output_dir: default_output_dir(),
            log_date_column: default_log_date_column(),
            identifier_column: None,
            output_stem: default_output_stem(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("attendlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".attendlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attendlog.conf")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn upload_path(&self) -> PathBuf {
        expand_tilde(&self.upload_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Create upload and output directories if missing.
    pub fn ensure_dirs(&self) -> AppResult<()> {
        fs::create_dir_all(self.upload_path())?;
        fs::create_dir_all(self.output_path())?;
        Ok(())
    }
}
