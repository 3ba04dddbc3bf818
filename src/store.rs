//! Note collection file I/O
//!
//! A collection is a JSON or YAML array of notes; the format is picked by
//! file extension.

use std::fs;
use std::path::Path;

use crate::constants::YAML_EXTENSIONS;
use crate::error::Result;
use crate::model::{Note, Tag};

/// On-disk encoding of a note file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| YAML_EXTENSIONS.iter().any(|y| e.eq_ignore_ascii_case(y)))
            .unwrap_or(false);
        if is_yaml {
            Format::Yaml
        } else {
            Format::Json
        }
    }
}

/// Load notes from `path`; a missing file is an empty collection
pub fn load_notes(path: &Path) -> Result<Vec<Note>> {
    load_list(path)
}

/// Load a global tag list from `path`; a missing file is an empty list
pub fn load_tags(path: &Path) -> Result<Vec<Tag>> {
    load_list(path)
}

fn load_list<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        log::debug!("{} does not exist, starting empty", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items: Vec<T> = match Format::from_path(path) {
        Format::Json => serde_json::from_str(&content)?,
        Format::Yaml => serde_yaml::from_str(&content)?,
    };
    Ok(items)
}

/// Save notes to `path`, creating parent directories as needed
pub fn save_notes(path: &Path, notes: &[Note]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = match Format::from_path(path) {
        Format::Json => serde_json::to_string_pretty(notes)?,
        Format::Yaml => serde_yaml::to_string(notes)?,
    };
    fs::write(path, content)?;
    log::debug!("saved {} notes to {}", notes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::Section;
    use tempfile::TempDir;

    fn sample() -> Vec<Note> {
        vec![
            Note::new("docker cleanup")
                .with_tags(["docker"])
                .with_section(Section::code_with_variables("docker rm $[[id]]", Some("bash"))),
            Note::new("reading list"),
        ]
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a/notes.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("notes.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("notes.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("notes")), Format::Json);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let notes = load_notes(&temp_dir.path().join("absent.json")).unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn test_save_and_load_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("notes.json");

        save_notes(&path, &sample()).unwrap();
        assert!(path.exists());
        assert_eq!(load_notes(&path).unwrap(), sample());
    }

    #[test]
    fn test_save_and_load_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.yaml");

        save_notes(&path, &sample()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("CODE_WITH_VARIABLES"));
        assert_eq!(load_notes(&path).unwrap(), sample());
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_notes(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { format: "JSON", .. }));
    }

    #[test]
    fn test_load_tags() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags.json");
        fs::write(&path, r#"[{"name": "rust"}, {"name": "old"}]"#).unwrap();

        let tags = load_tags(&path).unwrap();
        assert_eq!(tags, vec![Tag::new("rust"), Tag::new("old")]);
    }
}
