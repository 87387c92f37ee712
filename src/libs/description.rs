// Pulls a one-line description out of `brew info` output.
//
// Formula output starts with a `name: stable x.y.z` header and has the
// description on the very next line. Cask output has a dedicated
// `==> Description` section instead.

use colored::Colorize;

use crate::libs::brew_info::InfoSource;
use crate::schemas::packages::{
    CASK_DESCRIPTION_MARKER, Description, ERROR_MARKER, PackageInfo, PackageKind,
};
use crate::{log_debug, log_warn};

/// Extracts the description for `name` from an already fetched `info`.
///
/// Prints a status line for every package whose description could be read.
/// Failed lookups are passed through untouched; the fetcher already reported them.
/// Info text that carries the error marker counts as a failure too.
///
/// # Arguments
/// * `name`: The package name, used for the status line.
/// * `kind`: Selects the formula or cask heuristic.
/// * `info`: What `brew info` returned for the package.
///
/// # Returns
/// * `Description::Found` with the one-line description.
/// * `Description::Missing` when Homebrew answered without a description.
/// * `Description::Failed` with a single line of error text.
pub fn extract(name: &str, kind: PackageKind, info: &PackageInfo) -> Description {
    let text = match info {
        PackageInfo::Failed(message) => return Description::Failed(message.clone()),
        PackageInfo::Fetched(text) => text,
    };

    // Homebrew can report an error and still exit 0. Only the marker line is
    // kept so the commented-out entry stays on one line.
    if let Some(error_line) = error_line(text) {
        log_warn!(
            "[Description] {} info for '{}' reports an error",
            kind,
            name.bold().red()
        );
        return Description::Failed(error_line.to_string());
    }

    // Pick the heuristic for the package kind.
    let description = match kind {
        PackageKind::Formula => formula_description(text),
        PackageKind::Cask => cask_description(text),
    };

    if description.is_empty() {
        println!("Found {} without a description.", name);
        log_debug!("[Description] No description in {} info for '{}'", kind, name.yellow());
        Description::Missing
    } else {
        println!("Package {} description: {}", name, description);
        Description::Found(description.to_string())
    }
}

/// Fetches and extracts in one go.
///
/// # Arguments
/// * `source`: Where the `brew info` text comes from.
/// * `name`: The package to look up.
/// * `kind`: Formula or cask.
///
/// # Returns
/// The extracted [`Description`], see [`extract`].
pub fn describe(source: &dyn InfoSource, name: &str, kind: PackageKind) -> Description {
    let info = source.fetch(name, kind);
    extract(name, kind, &info)
}

/// First line carrying the error marker, trimmed.
fn error_line(text: &str) -> Option<&str> {
    text.lines()
        .find(|line| line.contains(ERROR_MARKER))
        .map(str::trim)
}

/// Line index 1 of the info text, or empty when there is no second line.
fn formula_description(text: &str) -> &str {
    text.split('\n').nth(1).unwrap_or("")
}

/// Text between the description header and the next newline, or empty when the
/// header is absent.
fn cask_description(text: &str) -> &str {
    text.split_once(CASK_DESCRIPTION_MARKER)
        .and_then(|(_, rest)| rest.split('\n').next())
        .unwrap_or("")
}
