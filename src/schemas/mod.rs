// Data structures shared across the crate.

// Package kinds, `brew info` answers and extracted descriptions.
pub mod packages;
// The optional settings file and the resolved run settings.
pub mod settings;
