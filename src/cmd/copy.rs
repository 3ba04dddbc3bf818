//! Clipboard flattening command module

use std::io;

use snipnote::{render_to_clipboard_text, Config};

pub fn run(config: &Config, html: Option<String>, values: Vec<String>) -> io::Result<()> {
    let html = super::input::read_text(html)?;
    let text = render_to_clipboard_text(&html, values.as_slice());

    if config.json {
        return super::input::print_json(&text);
    }
    print!("{}", text);
    Ok(())
}
