// Orchestrates a regeneration run:
// 1. resolves the input and output paths,
// 2. reads the existing `homebrew.nix`,
// 3. extracts the requested package lists,
// 4. looks up every package and renders the new file,
// 5. writes it and reports the updated lists.

use std::fs;
use std::io;
use std::path::PathBuf;

use colored::Colorize;
use thiserror::Error;

use crate::libs::brew_info::{BrewCli, InfoSource};
use crate::libs::nix_generator::generate;
use crate::libs::nix_parser::{NixParseError, package_names};
use crate::libs::paths::{PathsError, resolve_paths};
use crate::schemas::packages::PackageKind;
use crate::schemas::settings::Settings;
use crate::{log_debug, log_info};

/// What the user asked to regenerate.
#[derive(Debug, Clone)]
pub struct RegenerateOptions {
    /// Path of the existing config file, `~` allowed.
    pub file: String,
    pub include_brews: bool,
    pub include_casks: bool,
}

#[derive(Debug, Error)]
pub enum RegenerateError {
    #[error(transparent)]
    Paths(#[from] PathsError),

    #[error("failed to read {}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] NixParseError),

    #[error("failed to write {}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

/// Entry point for a run against the real Homebrew CLI.
///
/// # Arguments
/// * `options`: Input file and which lists to regenerate.
/// * `settings`: Resolved brew binary and output path.
///
/// # Returns
/// * `Ok(())` once the output file is written, including when some lookups failed.
/// * `Err(RegenerateError)` when the input can't be read or parsed, or the output
///   can't be written.
pub fn run(options: &RegenerateOptions, settings: &Settings) -> Result<(), RegenerateError> {
    log_debug!("Entered regenerate::run() with {:?}", options);
    // Lookups go through the configured `brew` binary.
    let brew = BrewCli::new(settings.brew_binary.as_str());
    log_debug!("[Regenerate] Using package manager '{}'", brew.binary());
    run_with(&brew, options, settings)
}

/// Same as [`run`], with the package lookups going through `source`.
///
/// # Arguments
/// * `source`: Answers the `brew info` lookups.
/// * `options`: Input file and which lists to regenerate.
/// * `settings`: Resolved output path (the brew binary is not used here).
pub fn run_with(
    source: &dyn InfoSource,
    options: &RegenerateOptions,
    settings: &Settings,
) -> Result<(), RegenerateError> {
    // Expand `~` and refuse to write over the input file.
    let (input, output) = resolve_paths(&options.file, &settings.output_file)?;

    // The input file is only ever read.
    let content = fs::read_to_string(&input).map_err(|source| RegenerateError::ReadInput {
        path: input.clone(),
        source,
    })?;

    // Lists that weren't asked for stay empty.
    let brews = requested_names(&content, PackageKind::Formula, options.include_brews)?;
    let casks = requested_names(&content, PackageKind::Cask, options.include_casks)?;

    // Every package is looked up once, in file order.
    let new_content = generate(source, &brews, &casks);

    // Created or truncated; nothing is written if parsing failed above.
    fs::write(&output, new_content).map_err(|source| RegenerateError::WriteOutput {
        path: output.clone(),
        source,
    })?;
    log_info!(
        "[Regenerate] Wrote {}",
        output.display().to_string().green()
    );

    println!("Updated brews: {}", list_repr(&brews));
    println!("Updated casks: {}", list_repr(&casks));
    Ok(())
}

/// Names listed for `kind`, or nothing when that kind wasn't requested.
fn requested_names(
    content: &str,
    kind: PackageKind,
    requested: bool,
) -> Result<Vec<String>, NixParseError> {
    if !requested {
        log_debug!("[Regenerate] Skipping '{}' list, not requested", kind.list_key());
        return Ok(Vec::new());
    }
    // A malformed entry propagates up to `main`, which logs it once and exits.
    package_names(content, kind)
}

/// Renders names as `['a', 'b']`.
fn list_repr(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}
