//! Tag collection helpers
//!
//! A user's global tag list and each note's tag list share tags by name but
//! neither owns the other. These helpers keep the two consistent.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::{Note, Tag};

/// Attach a tag to a note, rejecting blank and duplicate names
pub fn add_tag_to_note(note: &mut Note, tag: Tag) -> Result<()> {
    if tag.name.trim().is_empty() {
        return Err(Error::EmptyTagName);
    }
    if note.has_tag(&tag.name) {
        return Err(Error::DuplicateTag { name: tag.name });
    }
    note.tags.push(tag);
    Ok(())
}

/// Detach a tag by name; returns whether anything was removed
pub fn remove_tag_from_note(note: &mut Note, name: &str) -> bool {
    let before = note.tags.len();
    note.tags.retain(|t| t.name != name);
    note.tags.len() != before
}

/// Distinct tags referenced by any note, in first-occurrence order
pub fn tags_in_use(notes: &[Note]) -> Vec<Tag> {
    let mut seen = HashSet::new();
    notes
        .iter()
        .flat_map(|n| n.tags.iter())
        .filter(|t| seen.insert(t.name.as_str()))
        .cloned()
        .collect()
}

/// Drop global tags that no note references, keeping order
pub fn remove_unused_tags(all_tags: &[Tag], notes: &[Note]) -> Vec<Tag> {
    let used: HashSet<&str> = notes.iter().flat_map(|n| n.tag_names()).collect();
    all_tags
        .iter()
        .filter(|t| used.contains(t.name.as_str()))
        .cloned()
        .collect()
}

/// Global tags that no note references
pub fn unused_tags(all_tags: &[Tag], notes: &[Note]) -> Vec<Tag> {
    let used: HashSet<&str> = notes.iter().flat_map(|n| n.tag_names()).collect();
    all_tags
        .iter()
        .filter(|t| !used.contains(t.name.as_str()))
        .cloned()
        .collect()
}
