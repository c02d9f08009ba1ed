// src/config.rs

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::controller::ResponseOrdering;
use crate::logging::project_directory;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SCAN_PATH: &str = "/predict";

/// Terminal client for a URL reputation scanning service.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "url-scout", version, about, long_about = None)]
pub struct Cli {
    /// Scan this URL once, print the report and exit instead of starting the TUI.
    #[arg(long)]
    pub url: Option<String>,

    /// Path to a TOML config file. Defaults to the platform config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base address of the scanning backend.
    #[arg(long, env = "URL_SCOUT_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Path of the scan endpoint, joined onto the base address.
    #[arg(long, env = "URL_SCOUT_SCAN_PATH")]
    pub scan_path: Option<String>,

    /// Abort a scan request after this many seconds. No timeout by default.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Apply every response as it arrives, even from superseded scans.
    #[arg(long, default_value_t = false)]
    pub legacy_ordering: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    pub scan_path: String,
    pub timeout_secs: Option<u64>,
    pub ordering: ResponseOrdering,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            scan_path: DEFAULT_SCAN_PATH.into(),
            timeout_secs: None,
            ordering: ResponseOrdering::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backend: BackendSettings,
    /// Where the theme preference is persisted. Defaults to the data dir.
    pub theme_file: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).wrap_err("invalid config file")
    }

    /// Applies command-line (and env-backed) overrides on top of file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = &cli.backend_url {
            self.backend.base_url = v.clone();
        }
        if let Some(v) = &cli.scan_path {
            self.backend.scan_path = v.clone();
        }
        if let Some(v) = cli.timeout_secs {
            self.backend.timeout_secs = Some(v);
        }
        if cli.legacy_ordering {
            self.backend.ordering = ResponseOrdering::LastResolved;
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    project_directory().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads settings: defaults, then the config file, then CLI/env overrides.
///
/// An explicitly passed `--config` must exist; the default location is
/// optional.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => read_file(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => read_file(&path)?,
            _ => {
                debug!("No config file found, using defaults.");
                Settings::default()
            }
        },
    };
    settings.apply_cli(cli);
    info!(
        base_url = %settings.backend.base_url,
        scan_path = %settings.backend.scan_path,
        ordering = ?settings.backend.ordering,
        "Settings loaded."
    );
    Ok(settings)
}

fn read_file(path: &Path) -> Result<Settings> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
    Settings::from_toml_str(&raw)
}
