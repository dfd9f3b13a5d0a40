//! Pulls short, display-ready snippets out of generated text.

mod highlights;
mod suggestions;

pub use highlights::{extract_highlights, DEFAULT_HIGHLIGHT};
pub use suggestions::extract_suggestions;

/// Upper bound for both suggestions and highlights.
pub const MAX_ITEMS: usize = 3;

/// First letter upper-cased, the rest lower-cased.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
