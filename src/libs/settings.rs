// Resolves the settings of a run.
//
// Precedence, highest first:
//   1. command-line flags (and their environment fallbacks, handled by clap)
//   2. the optional `settings.yaml` file
//   3. built-in defaults

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use thiserror::Error;

use crate::libs::utilities::path_helpers::expand_tilde;
use crate::schemas::settings::{
    DEFAULT_BREW_BINARY, DEFAULT_OUTPUT_FILE, DEFAULT_SETTINGS_FILE, Settings, SettingsFile,
};
use crate::{log_debug, log_info};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Values that came in through the command line or the environment.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub brew_binary: Option<String>,
    pub output_file: Option<String>,
    /// Explicit settings file. When `None` the default location is tried and
    /// silently skipped if absent.
    pub settings_file: Option<String>,
}

/// Merges overrides, the settings file and the defaults.
///
/// # Arguments
/// * `overrides`: Values from CLI flags or environment variables. They win
///   over the settings file, which wins over the built-in defaults.
///
/// # Returns
/// * `Ok(Settings)` with tildes already expanded in the output path.
/// * `Err(SettingsError)` if an explicit settings file is missing, or any
///   settings file is unreadable or malformed.
pub fn resolve(overrides: &SettingsOverrides) -> Result<Settings, SettingsError> {
    // An explicit settings file must exist; the default one is optional.
    let file = match &overrides.settings_file {
        Some(path) => load_settings_file(&expand_tilde(path), true)?,
        None => load_settings_file(&expand_tilde(DEFAULT_SETTINGS_FILE), false)?,
    };

    let brew_binary = overrides
        .brew_binary
        .clone()
        .or(file.brew_binary)
        .unwrap_or_else(|| DEFAULT_BREW_BINARY.to_string());
    let output_file = overrides
        .output_file
        .clone()
        .or(file.output_file)
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

    let settings = Settings {
        brew_binary,
        output_file: expand_tilde(&output_file),
    };
    log_debug!("[Settings] Resolved settings: {:?}", settings);
    Ok(settings)
}

/// Reads `settings.yaml` at `path`.
///
/// A missing file yields empty settings unless `required` is set. An unreadable
/// or malformed file is always an error.
fn load_settings_file(path: &Path, required: bool) -> Result<SettingsFile, SettingsError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            log_debug!(
                "[Settings] No settings file at {}, using defaults",
                path.display()
            );
            return Ok(SettingsFile::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    // An empty file deserializes to nothing at all, treat it like an empty mapping.
    if contents.trim().is_empty() {
        return Ok(SettingsFile::default());
    }

    let file = serde_yaml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log_info!(
        "[Settings] Loaded settings from {}",
        path.display().to_string().cyan()
    );
    Ok(file)
}
