// Defines the data structures that flow through a regeneration run:
// which kind of package we are dealing with, what Homebrew told us about it,
// and the description we pulled out of that answer.

use std::fmt;

/// Marker Homebrew puts in front of its error messages.
///
/// Any description carrying this marker is treated as a failed lookup and its
/// entry is commented out in the generated file. This is Homebrew's text output,
/// not a stable protocol, so it lives here and nowhere else.
pub const ERROR_MARKER: &str = "Error:";

/// Header that precedes the description line in `brew info --cask` output.
pub const CASK_DESCRIPTION_MARKER: &str = "==> Description\n";

/// The two kinds of Homebrew packages a `homebrew.nix` file lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// A command-line package, listed under `brews`.
    Formula,
    /// A GUI application, listed under `casks`.
    Cask,
}

impl PackageKind {
    /// The flag passed to `brew info` to select this kind.
    pub fn info_flag(self) -> &'static str {
        match self {
            PackageKind::Formula => "--formula",
            PackageKind::Cask => "--cask",
        }
    }

    /// The list key this kind lives under in `homebrew.nix`.
    pub fn list_key(self) -> &'static str {
        match self {
            PackageKind::Formula => "brews",
            PackageKind::Cask => "casks",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageKind::Formula => write!(f, "formula"),
            PackageKind::Cask => write!(f, "cask"),
        }
    }
}

/// The raw answer of a `brew info` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageInfo {
    /// The command succeeded; holds its full decoded output.
    Fetched(String),
    /// The command failed; holds a single line of error text that contains
    /// [`ERROR_MARKER`].
    Failed(String),
}

impl PackageInfo {
    /// Builds a `Failed` value, making sure the text carries the error marker.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains(ERROR_MARKER) {
            PackageInfo::Failed(message)
        } else {
            PackageInfo::Failed(format!("{} {}", ERROR_MARKER, message))
        }
    }
}

/// The one-line description extracted for a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Found(String),
    /// Homebrew answered, but there was no description to extract.
    Missing,
    /// The lookup failed; holds the error text to put in the comment.
    Failed(String),
}

impl Description {
    /// Text that goes after the `#` of an entry line.
    pub fn comment_text(&self) -> &str {
        match self {
            Description::Found(text) | Description::Failed(text) => text,
            Description::Missing => "",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Description::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_flag_and_key() {
        assert_eq!(PackageKind::Formula.info_flag(), "--formula");
        assert_eq!(PackageKind::Cask.info_flag(), "--cask");
        assert_eq!(PackageKind::Formula.list_key(), "brews");
        assert_eq!(PackageKind::Cask.list_key(), "casks");
    }

    #[test]
    fn failed_info_always_carries_marker() {
        assert_eq!(
            PackageInfo::failed("Error: No available formula with the name \"nope\"."),
            PackageInfo::Failed("Error: No available formula with the name \"nope\".".to_string())
        );
        assert_eq!(
            PackageInfo::failed("brew exited with status 1"),
            PackageInfo::Failed("Error: brew exited with status 1".to_string())
        );
    }

    #[test]
    fn missing_description_has_empty_comment() {
        assert_eq!(Description::Missing.comment_text(), "");
        assert!(!Description::Missing.is_failure());
        assert!(Description::Failed("Error: x".into()).is_failure());
    }
}
