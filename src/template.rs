//! Variable-placeholder codec for code-with-variables sections
//!
//! Authoring form: plain text with `$[[label]]` markers.
//! Interactive form: the same text, highlighted, with every marker replaced
//! by a single-line input element:
//!
//! ```text
//! docker rm $[[container]]
//! docker rm <input class="variable-input" placeholder="container">
//! ```
//!
//! The clipboard form flattens the interactive form back to plain text with
//! each input element replaced by the value typed into it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Opening placeholder marker
pub const PLACEHOLDER_START: &str = "$[[";

/// Closing placeholder marker
pub const PLACEHOLDER_END: &str = "]]";

/// CSS class carried by generated input elements
pub const INPUT_CLASS: &str = "variable-input";

static INPUT_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<input\b[^<>]*>").expect("valid input element regex"));

static PLACEHOLDER_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\splaceholder\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#)
        .expect("valid placeholder attribute regex")
});

static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^<>]*>").expect("valid tag regex"));

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("valid entity regex")
});

/// Escape text for HTML content or a double-quoted attribute.
///
/// Also serves as the highlighter for un-highlighted display mode.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode the HTML entities an editor or highlighter emits; unknown entities stay as-is
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match body {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some(' '),
                    _ => None,
                }
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Labels are rendered in a single-line field: drop line breaks, trim
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Build the interactive input element for a label
fn input_element(label: &str) -> String {
    format!(
        "<input class=\"{}\" placeholder=\"{}\">",
        INPUT_CLASS,
        escape_html(&normalize_label(label))
    )
}

/// A placeholder found in authoring text
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

/// Split authoring text into text and placeholder segments.
///
/// An unterminated `$[[` yields an empty-label placeholder and swallows the
/// rest of the input.
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(PLACEHOLDER_START) {
        if start > 0 {
            out.push(Segment::Text(&rest[..start]));
        }
        let after_start = &rest[start + PLACEHOLDER_START.len()..];
        match after_start.find(PLACEHOLDER_END) {
            Some(end) => {
                out.push(Segment::Placeholder(&after_start[..end]));
                rest = &after_start[end + PLACEHOLDER_END.len()..];
            }
            None => {
                log::warn!(
                    "unterminated placeholder, discarding {} trailing bytes",
                    after_start.len()
                );
                out.push(Segment::Placeholder(""));
                rest = "";
            }
        }
    }

    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}

/// Convert authoring text into the interactive form.
///
/// `highlighter` receives every segment outside placeholders, so syntax
/// highlighting never sees the markers and never touches the input elements.
pub fn encode_to_interactive<F>(text: &str, highlighter: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Text(t) => out.push_str(&highlighter(t)),
            Segment::Placeholder(label) => out.push_str(&input_element(label)),
        }
    }
    out
}

/// Normalized labels of all placeholders in authoring text, in order
pub fn placeholder_labels(text: &str) -> Vec<String> {
    segments(text)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Placeholder(label) => Some(normalize_label(label)),
            Segment::Text(_) => None,
        })
        .collect()
}

/// Placeholder label of an input element, or empty when absent
fn input_label(element: &str) -> String {
    PLACEHOLDER_ATTR
        .captures(element)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| decode_entities(m.as_str()))
        .unwrap_or_default()
}

/// Replace every input element with its `$[[label]]` marker.
///
/// Entities in the surrounding text are decoded so text escaped by
/// `escape_html` comes back verbatim; other markup is left untouched.
pub fn decode_to_placeholder_text(rendered_html: &str) -> String {
    let mut out = String::with_capacity(rendered_html.len());
    let mut last = 0usize;

    for element in INPUT_ELEMENT.find_iter(rendered_html) {
        out.push_str(&decode_entities(&rendered_html[last..element.start()]));
        out.push_str(PLACEHOLDER_START);
        out.push_str(&input_label(element.as_str()));
        out.push_str(PLACEHOLDER_END);
        last = element.end();
    }
    out.push_str(&decode_entities(&rendered_html[last..]));
    out
}

/// Start a new line unless output is empty or already ends with one
fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Flatten the interactive form into clipboard text.
///
/// The Nth input element is replaced by `current_values[N]`; missing values
/// are treated as empty and surplus values are ignored. `<br>` and block
/// boundaries become `\n`, other markup is dropped and entities are decoded.
pub fn render_to_clipboard_text<S: AsRef<str>>(rendered_html: &str, current_values: &[S]) -> String {
    let mut out = String::with_capacity(rendered_html.len());
    let mut next_value = 0usize;
    let mut last = 0usize;

    // Set by a closing block; the break is emitted only if content follows
    let mut pending_break = false;

    for caps in ANY_TAG.captures_iter(rendered_html) {
        let Some(tag) = caps.get(0) else { continue };
        let text = decode_entities(&rendered_html[last..tag.start()]);
        if !text.is_empty() {
            if pending_break {
                break_line(&mut out);
                pending_break = false;
            }
            out.push_str(&text);
        }
        last = tag.end();

        let closing = &caps[1] == "/";
        let name = caps[2].to_ascii_lowercase();
        match name.as_str() {
            "input" if !closing => {
                if pending_break {
                    break_line(&mut out);
                    pending_break = false;
                }
                match current_values.get(next_value) {
                    Some(value) => out.push_str(value.as_ref()),
                    None => log::warn!(
                        "no value for input field {}, only {} supplied",
                        next_value,
                        current_values.len()
                    ),
                }
                next_value += 1;
            }
            "br" => {
                if pending_break {
                    break_line(&mut out);
                    pending_break = false;
                }
                out.push('\n');
            }
            "div" | "p" if closing => pending_break = true,
            "div" | "p" => {
                break_line(&mut out);
                pending_break = false;
            }
            _ => {}
        }
    }

    let tail = decode_entities(&rendered_html[last..]);
    if !tail.is_empty() {
        if pending_break {
            break_line(&mut out);
        }
        out.push_str(&tail);
    }

    if next_value < current_values.len() {
        log::debug!(
            "ignoring {} surplus clipboard values",
            current_values.len() - next_value
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_encode_single_placeholder() {
        let out = encode_to_interactive("x = $[[NAME]] done", identity);
        assert_eq!(out, "x = <input class=\"variable-input\" placeholder=\"NAME\"> done");
    }

    #[test]
    fn test_highlighter_sees_only_text_segments() {
        let out = encode_to_interactive("a $[[b]] c $[[d]]", |s: &str| format!("<span>{}</span>", s));
        assert_eq!(
            out,
            "<span>a </span><input class=\"variable-input\" placeholder=\"b\">\
             <span> c </span><input class=\"variable-input\" placeholder=\"d\">"
        );
    }

    #[test]
    fn test_round_trip() {
        let text = "x = $[[NAME]] done";
        let rendered = encode_to_interactive(text, identity);
        assert_eq!(decode_to_placeholder_text(&rendered), text);

        let text = "cp $[[src]] $[[dst]]";
        let rendered = encode_to_interactive(text, escape_html);
        assert_eq!(decode_to_placeholder_text(&rendered), text);
    }

    #[test]
    fn test_round_trip_escaped_label() {
        let text = "echo $[[say \"hi\" & <bye>]]";
        let rendered = encode_to_interactive(text, identity);
        assert!(rendered.contains("placeholder=\"say &quot;hi&quot; &amp; &lt;bye&gt;\""));
        assert_eq!(decode_to_placeholder_text(&rendered), text);
    }

    #[test]
    fn test_unterminated_placeholder() {
        let out = encode_to_interactive("before $[[incomplete", |s: &str| format!("[{}]", s));
        assert_eq!(out, "[before ]<input class=\"variable-input\" placeholder=\"\">");
        assert_eq!(decode_to_placeholder_text(&out), "[before ]$[[]]");
    }

    #[test]
    fn test_search_resumes_after_end_marker() {
        assert_eq!(placeholder_labels("$[[a]]]] $[[b]]"), vec!["a", "b"]);
        let out = encode_to_interactive("$[[a]]]]", identity);
        assert_eq!(out, "<input class=\"variable-input\" placeholder=\"a\">]]");
    }

    #[test]
    fn test_label_normalized() {
        let out = encode_to_interactive("$[[  multi\nline \r\n]]", identity);
        assert_eq!(out, "<input class=\"variable-input\" placeholder=\"multiline\">");
        assert_eq!(normalize_label(" a\nb "), "ab");
    }

    #[test]
    fn test_empty_and_marker_free_text() {
        assert_eq!(encode_to_interactive("", identity), "");
        assert_eq!(encode_to_interactive("no vars", escape_html), "no vars");
        assert!(placeholder_labels("no vars").is_empty());
    }

    #[test]
    fn test_decode_foreign_input_elements() {
        let html = r#"a <INPUT placeholder='x y'> b <input type="text"/> c"#;
        assert_eq!(decode_to_placeholder_text(html), "a $[[x y]] b $[[]] c");
    }

    #[test]
    fn test_clipboard_substitution() {
        let html = "echo <input class=\"variable-input\" placeholder=\"a\"><br>cat <input placeholder=\"b\">";
        let out = render_to_clipboard_text(html, &["A", "B"]);
        assert_eq!(out, "echo A\ncat B");
    }

    #[test]
    fn test_clipboard_strips_highlighting() {
        let rendered = encode_to_interactive("if a < b\n  cp $[[file]] /tmp", |s: &str| {
            format!("<span class=\"hl\">{}</span>", escape_html(s))
        });
        let out = render_to_clipboard_text(&rendered, &["notes.txt"]);
        assert_eq!(out, "if a < b\n  cp notes.txt /tmp");
    }

    #[test]
    fn test_clipboard_block_lines() {
        let html = "first<div>second <input placeholder=\"v\"></div><div>third</div>";
        assert_eq!(render_to_clipboard_text(html, &["x"]), "first\nsecond x\nthird");
    }

    #[test]
    fn test_clipboard_missing_values_are_empty() {
        let html = "<input placeholder=\"a\">-<input placeholder=\"b\">";
        assert_eq!(render_to_clipboard_text(html, &["A"]), "A-");
        assert_eq!(render_to_clipboard_text::<&str>(html, &[]), "-");
    }

    #[test]
    fn test_clipboard_surplus_values_ignored() {
        let html = "x=<input placeholder=\"a\">";
        assert_eq!(render_to_clipboard_text(html, &["1", "2", "3"]), "x=1");
    }

    #[test]
    fn test_clipboard_values_inserted_verbatim() {
        let html = "<input placeholder=\"a\">";
        assert_eq!(render_to_clipboard_text(html, &["&amp;<b>"]), "&amp;<b>");
    }

    #[test]
    fn test_round_trip_escaped_text() {
        let text = "if a < b && c $[[x]] || echo \"it's\"";
        let rendered = encode_to_interactive(text, escape_html);
        assert!(rendered.contains("&lt;") && rendered.contains("&amp;&amp;"));
        assert_eq!(decode_to_placeholder_text(&rendered), text);
    }

    #[test]
    fn test_clipboard_closing_block_then_text() {
        assert_eq!(render_to_clipboard_text::<&str>("<div>a</div>b", &[]), "a\nb");
        assert_eq!(render_to_clipboard_text::<&str>("<div>a</div>", &[]), "a");
    }

    #[test]
    fn test_clipboard_paragraphs() {
        assert_eq!(render_to_clipboard_text::<&str>("<p>a</p>b", &[]), "a\nb");
        let html = "<p>one</p><p>two <input placeholder=\"v\"></p>";
        assert_eq!(render_to_clipboard_text(html, &["x"]), "one\ntwo x");
    }

    #[test]
    fn test_clipboard_closing_block_then_input() {
        let html = "<div>cd</div><input placeholder=\"dir\">";
        assert_eq!(render_to_clipboard_text(html, &["/tmp"]), "cd\n/tmp");
    }

    #[test]
    fn test_unescaped_angle_bracket_keeps_input() {
        let rendered = encode_to_interactive("a<b c $[[x]] $[[y]]", identity);
        assert_eq!(render_to_clipboard_text(&rendered, &["X", "Y"]), "a<b c X Y");
        assert_eq!(decode_to_placeholder_text(&rendered), "a<b c $[[x]] $[[y]]");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("&lt;a&gt; &amp; &#39;&#x41;&nbsp;&bogus;"), "<a> & 'A &bogus;");
    }
}
