//! HTML output: the interactive editor page and the printable snapshot.
//!
//! Both renderers only read the table. User-entered text is escaped before
//! it reaches the markup.

pub mod page;
pub mod snapshot;

pub use page::render_page;
pub use snapshot::render_snapshot;

/// HTML-escape a string
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
