// Small path utilities shared by the settings and output resolution.

use std::path::{Path, PathBuf};

/// Resolves paths that start with a tilde `~` to the user's home directory,
/// like `~/nix/homebrew.nix` -> `/Users/you/nix/homebrew.nix`.
///
/// # Returns
/// * `PathBuf`: The resolved path if `~` was present and the home directory
///   could be determined. Otherwise the original path unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            // Only the leading `~` is replaced.
            return PathBuf::from(path.replacen('~', &home.to_string_lossy(), 1));
        }
    }
    PathBuf::from(path)
}

/// Whether `a` and `b` name the same existing file.
/// Returns `false` when either side cannot be canonicalized (e.g. it doesn't exist yet).
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
