//! Placeholder listing command module

use std::io;

use snipnote::template::placeholder_labels;
use snipnote::Config;

pub fn run(config: &Config, text: Option<String>) -> io::Result<()> {
    let text = super::input::read_text(text)?;
    let labels = placeholder_labels(&text);

    if config.json {
        return super::input::print_json(&labels);
    }
    for label in &labels {
        println!("{}", label);
    }
    Ok(())
}
