//! Text shaping helpers for long-form content.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Split authored copy into paragraphs on blank lines. Surrounding
/// whitespace is trimmed and empty segments are dropped, so trailing
/// newlines in the source never produce empty `<p>` elements.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()).collect()
}
