//! Text helpers for article URLs and bylines

use deunicode::deunicode;

/// Build a URL-friendly slug from an article title.
///
/// Non-ASCII text is transliterated first ("Café" -> "cafe",
/// "Привет" -> "privet"), apostrophes are dropped, ASCII letters and digits
/// are kept (lowercased) and every run of anything else collapses into a
/// single `-`. "The C# API & Python Renderer!" becomes
/// "the-c-api-python-renderer".
pub fn create_slug(title: &str) -> String {
    let ascii = deunicode(title);
    let mut slug = String::with_capacity(ascii.len());
    let mut last_was_dash = false;

    for ch in ascii.chars() {
        if ch == '\'' {
            continue;
        }
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// First name in a comma-separated author list, trimmed.
pub fn extract_first_author(authors: &str) -> String {
    authors
        .split_once(',')
        .map_or(authors, |(first, _)| first)
        .trim()
        .to_string()
}

/// Escape text for inclusion in HTML element content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
