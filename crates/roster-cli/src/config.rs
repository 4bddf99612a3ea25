//! User settings persisted as TOML.
//!
//! Stored in the platform config folder unless `--config` names a file:
//! - Linux: ~/.config/roster/settings.toml
//! - macOS: ~/Library/Application Support/com.roster.Roster/settings.toml
//! - Windows: %APPDATA%/roster/Roster/config/settings.toml

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use roster_pipeline::StandardFormatter;
use roster_report::DocumentOptions;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "roster";
const APP_NAME: &str = "Roster";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows per page in `roster view`.
    pub page_size: usize,
    /// `chrono` strftime pattern for date columns.
    pub date_format: String,
    /// Prepended to currency amounts, e.g. "Rs. ".
    pub currency_prefix: String,
    /// Decimal places for fractional numbers and currency.
    pub decimals: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            date_format: "%Y-%m-%d".to_string(),
            currency_prefix: String::new(),
            decimals: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Table rows per printed page in document exports.
    pub document_rows_per_page: usize,
    /// Where exports go when `--output` is not given.
    pub default_output_dir: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            document_rows_per_page: DocumentOptions::default().rows_per_page,
            default_output_dir: None,
        }
    }
}

impl Settings {
    pub fn formatter(&self) -> StandardFormatter {
        StandardFormatter::default()
            .with_date_format(self.display.date_format.clone())
            .with_currency_prefix(self.display.currency_prefix.clone())
            .with_decimals(self.display.decimals)
    }

    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            rows_per_page: self.export.document_rows_per_page.max(1),
        }
    }
}

/// Platform settings file, or `None` when no home directory is known.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from `explicit` or the platform path.
///
/// Never fails: a missing file, unreadable file, or parse error yields the
/// defaults (the latter two with a warning).
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match settings_path() {
            Some(path) => path,
            None => {
                warn!("could not determine settings path, using defaults");
                return Settings::default();
            }
        },
    };
    load_settings_from(&path)
}

fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to parse settings, using defaults");
                Settings::default()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "failed to read settings, using defaults");
            Settings::default()
        }
    }
}
