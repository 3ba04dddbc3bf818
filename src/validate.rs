//! Note validation before save

use std::collections::HashSet;

use crate::constants::MAX_TITLE_LENGTH;
use crate::error::{Error, Result};
use crate::model::Note;

/// Check a note is fit to be saved
pub fn validate_note(note: &Note) -> Result<()> {
    validate_title(&note.title)?;

    let mut seen = HashSet::new();
    for name in note.tag_names() {
        if name.trim().is_empty() {
            return Err(Error::EmptyTagName);
        }
        if !seen.insert(name) {
            return Err(Error::DuplicateTag { name: name.to_string() });
        }
    }

    for (i, section) in note.sections.iter().enumerate() {
        if !section.kind.is_code() && section.programming_language.is_some() {
            return Err(Error::LanguageOnPlainText { section: i });
        }
    }

    Ok(())
}

/// Title must be non-blank and within `MAX_TITLE_LENGTH` characters
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::TitleEmpty);
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(Error::TitleTooLong { len, max: MAX_TITLE_LENGTH });
    }
    Ok(())
}
