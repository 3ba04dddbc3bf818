//! Note data model
//!
//! Field and variant names follow the web client's wire format, so a note
//! collection exported from the client loads unchanged.

use serde::{Deserialize, Serialize};

/// A single user note
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Backend identifier; absent or negative until the note is saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, rename = "noteInputs", alias = "sections")]
    pub sections: Vec<Section>,
}

impl Note {
    /// Create a blank, unsaved note with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            tags: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Builder-style tag attachment (no duplicate check, see `tags::add_tag_to_note`)
    pub fn with_tags<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(names.into_iter().map(Tag::new));
        self
    }

    /// Builder-style section append
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Whether the note has been persisted by the backend
    pub fn is_saved(&self) -> bool {
        matches!(self.id, Some(id) if id >= 0)
    }

    /// Iterate over the note's tag names
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.name.as_str())
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tag_names().any(|t| t == name)
    }
}

/// A tag; identity is exact, case-sensitive name equality
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Kind of content block.
///
/// Declaration order is significant: consumers index section kinds by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionType {
    PlainText,
    Code,
    CodeWithVariables,
}

impl SectionType {
    /// All section kinds in their fixed order
    pub const ALL: [SectionType; 3] = [
        SectionType::PlainText,
        SectionType::Code,
        SectionType::CodeWithVariables,
    ];

    /// Position of this kind within `ALL`
    pub fn index(self) -> usize {
        match self {
            SectionType::PlainText => 0,
            SectionType::Code => 1,
            SectionType::CodeWithVariables => 2,
        }
    }

    /// Whether a programming language is meaningful for this kind
    pub fn is_code(self) -> bool {
        !matches!(self, SectionType::PlainText)
    }
}

/// One typed content block of a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programming_language: Option<String>,
}

impl Section {
    pub fn plain_text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: SectionType::PlainText,
            programming_language: None,
        }
    }

    pub fn code(value: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            value: value.into(),
            kind: SectionType::Code,
            programming_language: language.map(str::to_string),
        }
    }

    pub fn code_with_variables(value: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            value: value.into(),
            kind: SectionType::CodeWithVariables,
            programming_language: language.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_saved() {
        let mut note = Note::new("draft");
        assert!(!note.is_saved());
        note.id = Some(-1);
        assert!(!note.is_saved());
        note.id = Some(0);
        assert!(note.is_saved());
    }

    #[test]
    fn test_section_type_order() {
        for (i, kind) in SectionType::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert!(!SectionType::PlainText.is_code());
        assert!(SectionType::CodeWithVariables.is_code());
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "id": 7,
            "title": "docker cleanup",
            "tags": [{"name": "docker"}],
            "noteInputs": [
                {"value": "docker rm $[[container]]", "type": "CODE_WITH_VARIABLES", "programmingLanguage": "bash"}
            ]
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, Some(7));
        assert!(note.has_tag("docker"));
        assert_eq!(note.sections[0].kind, SectionType::CodeWithVariables);
        assert_eq!(note.sections[0].programming_language.as_deref(), Some("bash"));

        let out = serde_json::to_value(&note).unwrap();
        assert_eq!(out["noteInputs"][0]["type"], "CODE_WITH_VARIABLES");
        assert_eq!(out["noteInputs"][0]["programmingLanguage"], "bash");
    }

    #[test]
    fn test_missing_fields_default() {
        let note: Note = serde_json::from_str(r#"{"title": "bare"}"#).unwrap();
        assert_eq!(note.id, None);
        assert!(note.tags.is_empty());
        assert!(note.sections.is_empty());
    }
}
