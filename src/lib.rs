//! snipnote - tagged code-snippet notes with variable placeholders
//!
//! The library holds the note model, the note search engine and the
//! `$[[label]]` placeholder codec. All of them are pure functions over
//! caller-supplied data; `store` and `config` are the only parts touching
//! the file system or environment.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod search;
pub mod store;
pub mod tags;
pub mod template;
pub mod validate;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Note, Section, SectionType, Tag};
pub use search::{search, SearchQuery};
pub use template::{decode_to_placeholder_text, encode_to_interactive, render_to_clipboard_text};
