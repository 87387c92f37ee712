//! # Homebrew Info Fetcher
//!
//! Runs `brew info --formula <name>` / `brew info --cask <name>` and hands back
//! the decoded output as a [`PackageInfo`].
//!
//! ## Failure handling
//!
//! A lookup never aborts the run. A non-zero exit or a binary that cannot be
//! spawned becomes [`PackageInfo::Failed`] holding one line of error text, which
//! the generator later turns into a commented-out entry.
//!
//! The calls are blocking and have no timeout; every package is queried exactly once.

use std::process::{Command, Output};

use colored::Colorize;

use crate::schemas::packages::{PackageInfo, PackageKind};
use crate::{log_debug, log_warn};

/// Anything that can answer "what does Homebrew say about this package?".
///
/// The generator only talks to this trait, so tests can swap the real `brew`
/// for a mock.
#[cfg_attr(test, mockall::automock)]
pub trait InfoSource {
    fn fetch(&self, name: &str, kind: PackageKind) -> PackageInfo;
}

/// [`InfoSource`] backed by the Homebrew command-line tool.
#[derive(Debug, Clone)]
pub struct BrewCli {
    binary: String,
}

impl BrewCli {
    /// `binary` is either a bare program name looked up on `PATH` or a full path.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl InfoSource for BrewCli {
    /// Runs `<binary> info --formula|--cask <name>` and captures both streams.
    ///
    /// # Arguments
    /// * `name`: The package to look up.
    /// * `kind`: Selects the `--formula` or `--cask` flag.
    ///
    /// # Returns
    /// * `PackageInfo::Fetched` with stdout then stderr on a zero exit.
    /// * `PackageInfo::Failed` with one `Error:` line otherwise. That line is
    ///   also printed, so the user sees it next to the status lines.
    fn fetch(&self, name: &str, kind: PackageKind) -> PackageInfo {
        let args = ["info", kind.info_flag(), name];
        log_debug!(
            "[Brew Info] Executing: {} {}",
            self.binary.cyan().bold(),
            args.join(" ").cyan()
        );

        let info = match Command::new(&self.binary).args(args).output() {
            Ok(output) if output.status.success() => {
                log_debug!(
                    "[Brew Info] Received {} bytes of info for {} '{}'",
                    output.stdout.len() + output.stderr.len(),
                    kind,
                    name
                );
                PackageInfo::Fetched(combined_output(&output))
            }
            Ok(output) => {
                // Fall back to the exit status when both streams were empty.
                let line = failure_line(&output).unwrap_or_else(|| {
                    format!(
                        "{} exited with status {}",
                        self.binary,
                        output.status.code().unwrap_or(-1)
                    )
                });
                PackageInfo::failed(line)
            }
            Err(e) => PackageInfo::failed(format!("failed to run {}: {}", self.binary, e)),
        };

        if let PackageInfo::Failed(message) = &info {
            log_warn!(
                "[Brew Info] Lookup failed for {} '{}'",
                kind,
                name.bold().red()
            );
            // `message` already starts with the error marker.
            println!("{}", message);
        }
        info
    }
}

/// Stdout followed by stderr, decoded lossily.
/// Homebrew prints warnings on stderr, so they land after the info block
/// instead of shifting its line positions.
fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

/// First line of the error output of a failed call.
/// Homebrew writes its errors to stderr, so that stream is checked first.
fn failure_line(output: &Output) -> Option<String> {
    [&output.stderr, &output.stdout]
        .into_iter()
        .map(|stream| String::from_utf8_lossy(stream))
        .find_map(|text| {
            text.trim()
                .lines()
                .next()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
        })
}
