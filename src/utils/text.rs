//! Text normalization for scraped cells and generated comments

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid regex"));
static INLINE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\u{a0}]+").expect("valid regex"));

/// Marker that opens every line of a generated doc comment.
pub const COMMENT_MARKER: &str = "/// ";

/// Clean up the raw text of an HTML cell.
///
/// Each line is trimmed and inner runs of spaces collapsed. Leading and
/// trailing blank lines are dropped; blank lines inside the text are kept so
/// every inner line break survives.
pub fn normalize_cell_text(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in LINE_BREAK.split(raw) {
        let line = INLINE_WHITESPACE.replace_all(line.trim(), " ").into_owned();
        if line.is_empty() && lines.is_empty() {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Turn every line break into a line break followed by a comment marker.
///
/// A text with `n` line breaks yields `n + 1` comment segments once the
/// caller prefixes the first line with [`COMMENT_MARKER`].
pub fn comment_continuation(text: &str) -> String {
    LINE_BREAK.replace_all(text, format!("\n{COMMENT_MARKER}").as_str()).into_owned()
}
