use clap::Parser;

use crate::commands::regenerate::RegenerateOptions;
use crate::libs::settings::SettingsOverrides;

/// Defines the command-line interface for `brew-nix-desc`.
/// `#[derive(Parser)]` generates the argument parsing code via `clap`.
#[derive(Parser, Debug)]
#[command(name = "brew-nix-desc", version)]
#[command(
    about = "Generate a homebrew.nix file based on the installed brews and casks, annotated with their descriptions.",
    long_about = None
)]
pub struct Cli {
    /// Include brews (the `brews = [ ... ];` list).
    #[arg(short, long)]
    pub brews: bool,

    /// Include casks (the `casks = [ ... ];` list).
    #[arg(short, long)]
    pub casks: bool,

    /// The existing homebrew.nix file to read package names from.
    #[arg(short, long, value_name = "PATH")]
    pub file: String,

    /// Where to write the regenerated file (defaults to ./new_homebrew.nix).
    #[arg(short, long, value_name = "PATH", env = "BREW_NIX_DESC_OUTPUT")]
    pub output: Option<String>,

    /// Homebrew binary used for `info` lookups (defaults to `brew` on PATH).
    #[arg(long, value_name = "PATH", env = "BREW_NIX_DESC_BREW")]
    pub brew_bin: Option<String>,

    /// Settings file (defaults to ~/.config/brew-nix-desc/settings.yaml).
    #[arg(long, value_name = "PATH", env = "BREW_NIX_DESC_SETTINGS")]
    pub settings: Option<String>,

    /// Turn debugging information on.
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    pub fn regenerate_options(&self) -> RegenerateOptions {
        RegenerateOptions {
            file: self.file.clone(),
            include_brews: self.brews,
            include_casks: self.casks,
        }
    }

    pub fn settings_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            brew_binary: self.brew_bin.clone(),
            output_file: self.output.clone(),
            settings_file: self.settings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["brew-nix-desc", "-b", "-c", "-f", "homebrew.nix"]).unwrap();
        assert!(cli.brews);
        assert!(cli.casks);
        assert_eq!(cli.file, "homebrew.nix");

        let options = cli.regenerate_options();
        assert!(options.include_brews && options.include_casks);
    }

    #[test]
    fn parses_long_flags() {
        let cli = Cli::try_parse_from([
            "brew-nix-desc",
            "--casks",
            "--file",
            "~/nix/homebrew.nix",
            "--output",
            "out.nix",
            "--brew-bin",
            "/opt/homebrew/bin/brew",
        ])
        .unwrap();
        assert!(!cli.brews);
        assert!(cli.casks);

        let overrides = cli.settings_overrides();
        assert_eq!(overrides.output_file.as_deref(), Some("out.nix"));
        assert_eq!(overrides.brew_binary.as_deref(), Some("/opt/homebrew/bin/brew"));
    }

    #[test]
    fn file_is_required() {
        assert!(Cli::try_parse_from(["brew-nix-desc", "-b"]).is_err());
    }
}
