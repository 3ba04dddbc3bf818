//! Text input helpers for commands

use std::io::{self, Read};
use std::path::Path;

use snipnote::constants::STDIN_ARG;

/// Read text from argument or stdin.
/// - Some("-") -> read from stdin
/// - Some(text) -> use the text directly
/// - None -> read from stdin (empty string if no data)
pub fn read_text(arg: Option<String>) -> io::Result<String> {
    read_text_from(arg, io::stdin())
}

/// `read_text` over any reader; read errors such as invalid UTF-8 are returned
fn read_text_from<R: Read>(arg: Option<String>, mut reader: R) -> io::Result<String> {
    match arg {
        Some(text) if text != STDIN_ARG => Ok(text),
        _ => {
            let mut buffer = String::new();
            reader.read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    println!("{}", out);
    Ok(())
}
