//! Runtime configuration
//!
//! The note file is resolved in priority order:
//! 1. `--notes PATH` on the command line
//! 2. `SNIPNOTE_FILE` environment variable
//! 3. `~/.snipnote/notes.json`

use std::path::PathBuf;

use crate::constants::{DEFAULT_NOTES_DIR, DEFAULT_NOTES_FILENAME, ENV_NOTES_FILE};

/// Settings shared by all commands
#[derive(Debug, Clone)]
pub struct Config {
    /// The note collection file
    pub notes_path: PathBuf,
    /// Whether to output in JSON format
    pub json: bool,
}

impl Config {
    /// Build the configuration from command-line values and the environment
    pub fn new(notes_arg: Option<&str>, json: bool) -> Self {
        // Treat empty strings as None
        let env_path = std::env::var(ENV_NOTES_FILE).ok().filter(|s| !s.is_empty());
        Self {
            notes_path: resolve_notes_path(notes_arg, env_path.as_deref()),
            json,
        }
    }
}

/// Default note file in the user's home directory
pub fn default_notes_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(DEFAULT_NOTES_DIR).join(DEFAULT_NOTES_FILENAME))
}

fn resolve_notes_path(notes_arg: Option<&str>, env_path: Option<&str>) -> PathBuf {
    if let Some(p) = notes_arg.filter(|s| !s.is_empty()) {
        return PathBuf::from(p);
    }
    if let Some(p) = env_path {
        return PathBuf::from(p);
    }
    default_notes_path()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_DIR).join(DEFAULT_NOTES_FILENAME))
}
