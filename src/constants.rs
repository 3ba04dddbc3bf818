//! Constants for snipnote
//!
//! File names, environment variables and limits shared across the crate.

// === File and Directory Names ===

/// Directory under the user's home holding the default note file
pub const DEFAULT_NOTES_DIR: &str = ".snipnote";

/// Default note collection file name
pub const DEFAULT_NOTES_FILENAME: &str = "notes.json";

/// Extensions loaded and saved as YAML; anything else is JSON
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

// === Environment Variables ===

/// Overrides the note collection file
pub const ENV_NOTES_FILE: &str = "SNIPNOTE_FILE";

// === Validation Limits ===

/// Maximum note title length, in characters
pub const MAX_TITLE_LENGTH: usize = 200;

// === CLI ===

/// Positional argument meaning "read from stdin"
pub const STDIN_ARG: &str = "-";
