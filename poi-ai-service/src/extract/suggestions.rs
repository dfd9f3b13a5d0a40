use super::MAX_ITEMS;
use once_cell::sync::Lazy;
use regex::Regex;

/// Numbered items, bullets, then "Try …" and "Visit …" phrases. Pattern order
/// decides precedence when deduplicating.
static SUGGESTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?m)\d+\.\s*(.+)",
        r"(?m)[-•]\s*(.+)",
        r"(?m)Try\s+(.+)",
        r"(?m)Visit\s+(.+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("suggestion pattern must compile"))
    .collect()
});

/// Up to three actionable items found in a chat reply, first occurrence wins.
pub fn extract_suggestions(text: &str) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    let matches = SUGGESTION_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty());

    for item in matches {
        if suggestions.len() == MAX_ITEMS {
            break;
        }
        if !suggestions.iter().any(|s| s == item) {
            suggestions.push(item.to_string());
        }
    }

    suggestions
}
