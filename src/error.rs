//! Error type for note validation, tag edits and note file I/O

use std::fmt;
use std::io;

/// Library error
#[derive(Debug)]
pub enum Error {
    /// Reading or writing a note file failed
    Io(io::Error),
    /// A note file could not be parsed or serialized
    Parse { format: &'static str, message: String },
    /// Note title is blank
    TitleEmpty,
    /// Note title exceeds the length bound
    TitleTooLong { len: usize, max: usize },
    /// Tag name already present on the note
    DuplicateTag { name: String },
    /// Tag name is blank
    EmptyTagName,
    /// A plain-text section carries a programming language
    LanguageOnPlainText { section: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Parse { format, message } => {
                write!(f, "Invalid {} note file: {}", format, message)
            }
            Error::TitleEmpty => write!(f, "Note title cannot be empty"),
            Error::TitleTooLong { len, max } => {
                write!(f, "Note title is {} characters long (max: {})", len, max)
            }
            Error::DuplicateTag { name } => {
                write!(f, "Tag '{}' is already attached to this note", name)
            }
            Error::EmptyTagName => write!(f, "Tag name cannot be empty"),
            Error::LanguageOnPlainText { section } => {
                write!(f, "Section {} is plain text but sets a programming language", section)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse { format: "JSON", message: e.to_string() }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Parse { format: "YAML", message: e.to_string() }
    }
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Io(inner) => inner,
            Error::Parse { .. } => io::Error::new(io::ErrorKind::InvalidData, e.to_string()),
            _ => io::Error::new(io::ErrorKind::InvalidInput, e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
