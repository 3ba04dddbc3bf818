//! Note search engine
//!
//! Filters an in-memory note collection by free text and selected tags.
//!
//! Rules:
//! 1. Free text matches a note if any search token matches any token of the
//!    title or of any tag name. Tokens are split on single spaces, trimmed and
//!    compared case-insensitively; the shorter token must be contained in the
//!    longer one, whichever side it came from.
//! 2. Selected tags narrow the result: every selected name must be present on
//!    the note verbatim (case-sensitive).
//! 3. When both are given, a note must satisfy both.
//!
//! The result borrows from the input and keeps its order.

use std::collections::BTreeSet;

use crate::model::Note;

/// Token separator for free-text matching
const TOKEN_SEPARATOR: char = ' ';

/// Transient search state: the search box text and the ticked tag filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub search_text: String,
    pub selected_tag_names: BTreeSet<String>,
}

impl SearchQuery {
    pub fn new(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            selected_tag_names: BTreeSet::new(),
        }
    }

    /// Add a tag filter
    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.selected_tag_names.insert(name.into());
        self
    }

    /// True when neither text nor tags would filter anything
    pub fn is_blank(&self) -> bool {
        is_blank(&self.search_text) && self.selected_tag_names.is_empty()
    }

    /// Run this query against a note collection
    pub fn run<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        search(notes, &self.search_text, &self.selected_tag_names)
    }
}

/// Return the notes matching `search_text` and `selected_tag_names`
pub fn search<'a>(
    notes: &'a [Note],
    search_text: &str,
    selected_tag_names: &BTreeSet<String>,
) -> Vec<&'a Note> {
    if notes.is_empty() {
        return Vec::new();
    }

    let text_blank = is_blank(search_text);
    let no_tags = selected_tag_names.is_empty();

    let result: Vec<&Note> = match (text_blank, no_tags) {
        (true, true) => notes.iter().collect(),
        (false, false) => notes
            .iter()
            .filter(|n| has_all_tags(n, selected_tag_names) && note_matches_text(n, search_text))
            .collect(),
        (false, true) => notes
            .iter()
            .filter(|n| note_matches_text(n, search_text))
            .collect(),
        (true, false) => notes
            .iter()
            .filter(|n| has_all_tags(n, selected_tag_names))
            .collect(),
    };

    log::debug!(
        "search text={:?} tags={:?}: {} of {} notes",
        search_text,
        selected_tag_names,
        result.len(),
        notes.len()
    );

    result
}

/// Whether every selected tag name is attached to the note (exact match)
pub fn has_all_tags(note: &Note, selected_tag_names: &BTreeSet<String>) -> bool {
    selected_tag_names.iter().all(|name| note.has_tag(name))
}

/// Whether the search text matches the note's title or any of its tags
pub fn note_matches_text(note: &Note, search_text: &str) -> bool {
    text_matches(search_text, &note.title)
        || note.tag_names().any(|tag| text_matches(search_text, tag))
}

/// Whitespace-tokenized, length-symmetric substring match
pub fn text_matches(search_text: &str, candidate: &str) -> bool {
    let search_tokens = tokenize(search_text);
    if search_tokens.is_empty() {
        return false;
    }
    let candidate_tokens = tokenize(candidate);

    search_tokens
        .iter()
        .any(|s| candidate_tokens.iter().any(|c| tokens_match(s, c)))
}

/// Split on the separator, dropping blank tokens; tokens come back trimmed and lower-cased
fn tokenize(text: &str) -> Vec<String> {
    text.split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// The shorter token is the needle
fn tokens_match(a: &str, b: &str) -> bool {
    if a.chars().count() <= b.chars().count() {
        b.contains(a)
    } else {
        a.contains(b)
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
