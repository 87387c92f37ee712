// Extracts the `brews` and `casks` package lists from a `homebrew.nix` file.
//
// This is marker search, not a Nix parser: a list is whatever sits between the
// first `<key> = [` and the next `];`, and an entry is the text between the
// first pair of double quotes on a line that starts with a quote.

use colored::Colorize;
use thiserror::Error;

use crate::log_debug;
use crate::schemas::packages::PackageKind;

/// Closes a list region.
const LIST_END: &str = "];";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NixParseError {
    /// A line inside the list opens a quoted entry but never closes it.
    #[error("malformed entry in '{key} = [' list: {line:?} has no closing quote")]
    UnterminatedEntry { key: &'static str, line: String },
}

/// Returns the package names listed under `kind`'s key.
///
/// A file without the list is not an error: a diagnostic is printed and the
/// list comes back empty.
///
/// # Arguments
/// * `content`: Full text of the existing `homebrew.nix`.
/// * `kind`: `Formula` reads `brews = [`, `Cask` reads `casks = [`.
///
/// # Returns
/// * `Ok(names)` in file order, possibly empty.
/// * `Err(NixParseError::UnterminatedEntry)` when a quoted entry is never closed.
pub fn package_names(content: &str, kind: PackageKind) -> Result<Vec<String>, NixParseError> {
    let key = kind.list_key();
    // Locate the list; a missing list only warrants a diagnostic.
    let Some(region) = list_region(content, key) else {
        println!(
            "No '{} = [' found in file. Check the content of the file.",
            key
        );
        return Ok(Vec::new());
    };

    // Only lines that open with a quote are entries; comments and blanks are skipped.
    let names = region
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('"'))
        .map(|line| quoted_entry(line, key))
        .collect::<Result<Vec<_>, _>>()?;

    log_debug!(
        "[Nix Parser] Found {} entries in '{}' list",
        names.len().to_string().cyan(),
        key
    );
    Ok(names)
}

/// Text between `<key> = [` and the first `];` after it.
fn list_region<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    let opening = format!("{} = [", key);
    // The region begins right after the opening marker...
    let start = content.find(&opening)? + opening.len();
    let rest = &content[start..];
    // ...and ends at the nearest closing marker, never a later one.
    let end = rest.find(LIST_END)?;
    Some(&rest[..end])
}

/// Token between the leading quote of `line` and the next quote.
fn quoted_entry(line: &str, key: &'static str) -> Result<String, NixParseError> {
    // `line` starts with a one-byte quote, so slicing past it is safe.
    line[1..]
        .split_once('"')
        .map(|(entry, _)| entry.to_string())
        .ok_or_else(|| NixParseError::UnterminatedEntry {
            key,
            line: line.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOMEBREW_NIX: &str = r#"{ ... }:
{
  homebrew = {
    enable = true;

    brews = [
      "git", # Distributed revision control system
      "jq",
      # "broken", # Error: No available formula
      "ripgrep"
    ];

    casks = [
      "firefox", # Web browser
    ];
  };
}
"#;

    #[test]
    fn parses_simple_brews_list() {
        let content = "brews = [\n  \"a\",\n  \"b\",\n];";
        assert_eq!(
            package_names(content, PackageKind::Formula).unwrap(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn skips_commented_and_blank_lines() {
        assert_eq!(
            package_names(HOMEBREW_NIX, PackageKind::Formula).unwrap(),
            vec!["git", "jq", "ripgrep"]
        );
        assert_eq!(
            package_names(HOMEBREW_NIX, PackageKind::Cask).unwrap(),
            vec!["firefox"]
        );
    }

    #[test]
    fn empty_list_yields_nothing() {
        assert!(
            package_names("casks = [];", PackageKind::Cask)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn missing_list_is_not_an_error() {
        let content = "casks = [\n  \"firefox\",\n];";
        assert!(
            package_names(content, PackageKind::Formula)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn unclosed_list_is_treated_as_missing() {
        let content = "brews = [\n  \"git\",\n";
        assert!(
            package_names(content, PackageKind::Formula)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn region_stops_at_first_closing_marker() {
        let content = "brews = [\n \"a\"\n];\ncasks = [\n \"b\"\n];";
        assert_eq!(
            package_names(content, PackageKind::Formula).unwrap(),
            vec!["a"]
        );
    }

    #[test]
    fn one_entry_per_line() {
        // Only the first quoted token of a line is taken.
        let content = "brews = [ \"git\" \"jq\" ];";
        assert_eq!(
            package_names(content, PackageKind::Formula).unwrap(),
            vec!["git"]
        );
    }

    #[test]
    fn unterminated_entry_is_fatal() {
        let content = "brews = [\n  \"git,\n];";
        assert_eq!(
            package_names(content, PackageKind::Formula),
            Err(NixParseError::UnterminatedEntry {
                key: "brews",
                line: "\"git,".to_string(),
            })
        );
    }
}
