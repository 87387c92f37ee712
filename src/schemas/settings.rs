// Defines the optional `settings.yaml` file and the fully resolved settings
// a run works with.

use serde::Deserialize;
use std::path::PathBuf;

/// Default package-manager binary, looked up on `PATH`.
pub const DEFAULT_BREW_BINARY: &str = "brew";
/// Default output file, relative to the current directory.
pub const DEFAULT_OUTPUT_FILE: &str = "new_homebrew.nix";
/// Where the settings file is looked up when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "~/.config/brew-nix-desc/settings.yaml";

/// Contents of `settings.yaml`. Every key is optional.
///
/// ```yaml
/// brew_binary: /opt/homebrew/bin/brew
/// output_file: ~/nix/new_homebrew.nix
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub brew_binary: Option<String>,
    pub output_file: Option<String>,
}

/// Settings after merging CLI flags, environment, settings file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program invoked as `<brew_binary> info --formula|--cask <name>`.
    pub brew_binary: String,
    /// File the regenerated config is written to.
    pub output_file: PathBuf,
}
