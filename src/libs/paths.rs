// Resolves the input and output paths of a run.

use std::path::{Path, PathBuf};

use colored::Colorize;
use thiserror::Error;

use crate::libs::utilities::path_helpers::{expand_tilde, same_file};
use crate::{log_debug, log_info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathsError {
    /// The regenerated file would replace the file it was generated from.
    #[error("output file {} is the input file; refusing to overwrite it", output.display())]
    OutputIsInput { output: PathBuf },
}

/// Expands the user-supplied input path and checks that `output` is a different file.
///
/// # Arguments
/// * `input`: The `--file` value, possibly starting with `~`.
/// * `output`: The already resolved output path.
///
/// # Returns
/// `(input_path, output_path)` ready to read from and write to.
pub fn resolve_paths(input: &str, output: &Path) -> Result<(PathBuf, PathBuf), PathsError> {
    let input_resolved = expand_tilde(input);
    log_debug!("[Paths] Resolved input path: {:?}", input_resolved);

    // Writing over the input would lose the original list.
    if same_file(&input_resolved, output) {
        return Err(PathsError::OutputIsInput {
            output: output.to_path_buf(),
        });
    }

    log_info!(
        "Reading {}, writing {}",
        input_resolved.display().to_string().cyan(),
        output.display().to_string().cyan()
    );
    Ok((input_resolved, output.to_path_buf()))
}
