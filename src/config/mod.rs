use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_against;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points to an alternative configuration file.
pub const CONFIG_ENV: &str = "VISITSHEET_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data file with the visit records (.csv, .xlsx, .xls, .ods, ...)
    #[serde(default = "default_source")]
    pub source: String,
    /// Worksheet name, used only by workbook sources
    #[serde(default = "default_sheet")]
    pub sheet: String,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_output")]
    pub output: String,

    /// Directory used to resolve relative paths (the config file's directory)
    #[serde(skip)]
    pub base_dir: PathBuf,
}

fn default_source() -> String {
    "source/records.csv".to_string()
}
fn default_sheet() -> String {
    "base".to_string()
}
fn default_template() -> String {
    "source/doc.html".to_string()
}
fn default_output() -> String {
    "output/doc.html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            sheet: default_sheet(),
            template: default_template(),
            output: default_output(),
            base_dir: Self::config_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("visitsheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".visitsheet")
        }
    }

    /// Return the full path of the config file (`VISITSHEET_CONFIG` wins)
    pub fn config_file() -> PathBuf {
        match env::var(CONFIG_ENV) {
            Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => Self::config_dir().join("visitsheet.conf"),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if !path.exists() {
            return Ok(Config {
                base_dir,
                ..Config::default()
            });
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        // An empty file is a valid "all defaults" configuration
        let mut cfg: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        cfg.base_dir = base_dir;
        Ok(cfg)
    }

    /// Resolve a configured path against the configuration directory.
    pub fn resolve(&self, p: &str) -> PathBuf {
        resolve_against(&self.base_dir, p)
    }

    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.source)
    }

    pub fn template_path(&self) -> PathBuf {
        self.resolve(&self.template)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }
}
