//! Search command module

use std::io;

use snipnote::{store, Config, SearchQuery};

pub fn run(config: &Config, text: Option<String>, tags: Vec<String>) -> io::Result<()> {
    let notes = store::load_notes(&config.notes_path)?;

    let mut query = SearchQuery::new(text.unwrap_or_default());
    query.selected_tag_names.extend(tags);

    let found = query.run(&notes);

    if config.json {
        return super::input::print_json(&found);
    }

    if found.is_empty() {
        eprintln!("No matching notes in {}", super::input::display_path(&config.notes_path));
        return Ok(());
    }

    for note in found {
        let tags: Vec<&str> = note.tag_names().collect();
        if tags.is_empty() {
            println!("{}", note.title);
        } else {
            println!("{}  [{}]", note.title, tags.join(", "));
        }
    }

    Ok(())
}
