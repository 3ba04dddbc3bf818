//! Validate every note in the collection

use std::io;

use snipnote::{store, validate, Config};

pub fn run(config: &Config) -> io::Result<()> {
    let notes = store::load_notes(&config.notes_path)?;

    for (i, note) in notes.iter().enumerate() {
        if let Err(e) = validate::validate_note(note) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Note {} ({:?}): {}", i, note.title, e),
            ));
        }
    }

    eprintln!(
        "{} notes OK in {}",
        notes.len(),
        super::input::display_path(&config.notes_path)
    );
    Ok(())
}
