use super::{capitalize, MAX_ITEMS};

/// Returned when no keyword of the category shows up in the description.
pub const DEFAULT_HIGHLIGHT: &str = "Đáng tham quan";

fn keywords_for(poi_type: &str) -> &'static [&'static str] {
    match poi_type {
        "restaurant" => &["delicious", "authentic", "famous", "traditional"],
        "cafe" => &["cozy", "modern", "relaxing", "popular"],
        "park" => &["beautiful", "green", "peaceful", "nature"],
        "museum" => &["historical", "cultural", "ancient", "artifacts"],
        _ => &[],
    }
}

/// Category keywords found (case-insensitively) in a description, capitalized.
///
/// Never empty: falls back to [`DEFAULT_HIGHLIGHT`].
pub fn extract_highlights(poi_type: &str, description: &str) -> Vec<String> {
    let haystack = description.to_lowercase();

    let highlights: Vec<String> = keywords_for(poi_type)
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .take(MAX_ITEMS)
        .map(|keyword| capitalize(keyword))
        .collect();

    if highlights.is_empty() {
        vec![DEFAULT_HIGHLIGHT.to_string()]
    } else {
        highlights
    }
}
