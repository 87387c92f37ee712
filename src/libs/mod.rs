// Building blocks used by the commands.

// Runs `brew info` for a package.
pub mod brew_info;
// Pulls a one-line description out of `brew info` output.
pub mod description;
// Renders the regenerated homebrew.nix.
pub mod nix_generator;
// Extracts the package lists from an existing homebrew.nix.
pub mod nix_parser;
// Input/output path resolution.
pub mod paths;
// Layered run settings.
pub mod settings;
pub mod utilities;
