use std::collections::HashMap;

/// Popularity assumed for categories missing from the popularity table.
pub const DEFAULT_POPULARITY: f64 = 0.5;

/// Directed "people who go to X also go to Y" relation between POI
/// categories, plus a base popularity per category.
///
/// Related lists keep their insertion order; the order carries no weight.
#[derive(Debug, Clone, Default)]
pub struct CategoryGraph {
    similarity: HashMap<String, Vec<String>>,
    popularity: HashMap<String, f64>,
}

impl CategoryGraph {
    /// An empty graph. Every lookup degrades to "no relations" and
    /// [`DEFAULT_POPULARITY`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The graph shipped with the service.
    pub fn builtin() -> Self {
        Self::new()
            .with_related("restaurant", &["cafe", "bakery", "fast_food"])
            .with_related("cafe", &["restaurant", "bakery", "park"])
            .with_related("park", &["playground", "viewpoint", "cafe"])
            .with_related("museum", &["viewpoint", "theatre", "library"])
            .with_related("hotel", &["guest_house", "restaurant", "cafe"])
            .with_related("supermarket", &["convenience", "marketplace", "bakery"])
            .with_related("hospital", &["pharmacy", "clinic", "dentist"])
            .with_popularity("restaurant", 1.0)
            .with_popularity("cafe", 0.9)
            .with_popularity("park", 0.8)
            .with_popularity("museum", 0.7)
            .with_popularity("supermarket", 0.85)
            .with_popularity("hospital", 0.6)
            .with_popularity("bank", 0.5)
    }

    /// Replace the related categories of `category`.
    pub fn with_related(mut self, category: &str, related: &[&str]) -> Self {
        self.similarity.insert(
            category.to_string(),
            related.iter().map(|r| r.to_string()).collect(),
        );
        self
    }

    /// Set the base popularity of `category`, clamped to `[0, 1]`.
    pub fn with_popularity(mut self, category: &str, score: f64) -> Self {
        self.popularity
            .insert(category.to_string(), score.clamp(0.0, 1.0));
        self
    }

    pub fn related(&self, category: &str) -> &[String] {
        self.similarity
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn popularity(&self, category: &str) -> f64 {
        self.popularity
            .get(category)
            .copied()
            .unwrap_or(DEFAULT_POPULARITY)
    }
}
