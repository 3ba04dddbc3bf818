//! Tag listing command module
//!
//! Without `--unused`, lists the distinct tags attached to notes.
//! With `--unused`, lists the entries of a global tag list that no note
//! references any more.

use std::io;
use std::path::Path;

use snipnote::{store, tags, Config};

pub fn run(config: &Config, unused: bool, all_tags: Option<String>) -> io::Result<()> {
    let notes = store::load_notes(&config.notes_path)?;

    let listed = match (unused, all_tags) {
        (true, Some(path)) => {
            let global = store::load_tags(Path::new(&path))?;
            tags::unused_tags(&global, &notes)
        }
        (true, None) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--unused requires --all-tags",
            ));
        }
        (false, _) => tags::tags_in_use(&notes),
    };

    if config.json {
        return super::input::print_json(&listed);
    }

    for tag in &listed {
        println!("{}", tag.name);
    }

    Ok(())
}
