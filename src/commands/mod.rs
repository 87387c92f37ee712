// Register application commands.

// Reads an existing homebrew.nix and writes an annotated copy.
pub mod regenerate;
