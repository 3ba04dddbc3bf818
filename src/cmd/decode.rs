//! Decode command module

use std::io;

use snipnote::{decode_to_placeholder_text, Config};

pub fn run(config: &Config, html: Option<String>) -> io::Result<()> {
    let html = super::input::read_text(html)?;
    let text = decode_to_placeholder_text(&html);

    if config.json {
        return super::input::print_json(&text);
    }
    print!("{}", text);
    Ok(())
}
