// This is the main module file for the `utilities` directory.

// Tilde expansion and file identity checks.
pub mod path_helpers;
