//! Deep links from report rows to source locations.

use std::fmt::Write;
use std::path::Path;

/// Shortens `path` to start at the first occurrence of `source_root`.
///
/// Returns the full path when the marker is empty or absent.
#[must_use]
pub fn display_path(path: &Path, source_root: &str) -> String {
    let full = path.display().to_string();
    if source_root.is_empty() {
        return full;
    }
    match full.find(source_root) {
        Some(start) => full[start..].to_string(),
        None => full,
    }
}

/// Builds a deep link by literal substitution into `template`.
///
/// Supported placeholders are `%file%` (full path), `%relFile%` (display
/// path) and `%line%`.
#[must_use]
pub fn deep_link(template: &str, path: &Path, line: usize, source_root: &str) -> String {
    let file = escape_url(&path.display().to_string());
    let rel_file = escape_url(&display_path(path, source_root));
    template
        .replace("%relFile%", &rel_file)
        .replace("%file%", &file)
        .replace("%line%", &line.to_string())
}

/// Percent-encodes characters that would break a terminal hyperlink.
#[must_use]
pub fn escape_url(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == ' ' || c == '%' || c.is_control() {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "%{b:02X}");
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Drops control characters so `text` cannot inject terminal sequences.
#[must_use]
pub fn printable(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Wraps `text` in an OSC 8 terminal hyperlink to `url`.
#[must_use]
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}
