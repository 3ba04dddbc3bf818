//! Encode command module

use std::io;

use snipnote::template::{encode_to_interactive, escape_html};
use snipnote::Config;

pub fn run(config: &Config, text: Option<String>) -> io::Result<()> {
    let text = super::input::read_text(text)?;
    let rendered = encode_to_interactive(&text, escape_html);

    if config.json {
        return super::input::print_json(&rendered);
    }
    print!("{}", rendered);
    Ok(())
}
