//! Rule-based POI recommendation.
//!
//! Visited categories vote for their related categories in the
//! [`CategoryGraph`], weighted by how often they were visited. Votes are
//! topped up with a popularity boost and a budget preference, then ranked.

mod preferences;

pub use preferences::{Budget, Preferences};

use crate::catalog::{display_name, CategoryGraph};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Score contributed per visit of a related category.
pub const SIMILARITY_WEIGHT: f64 = 0.3;

/// Weight of the base popularity added to every candidate.
pub const POPULARITY_WEIGHT: f64 = 0.2;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Reasons kept per recommendation.
const MAX_REASONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub category: String,
    pub score: f64,
    pub reason: String,
    pub name: String,
}

#[derive(Debug, Default)]
struct Candidate {
    score: f64,
    reasons: Vec<String>,
}

impl Candidate {
    fn reason(&self) -> String {
        let mut unique: Vec<&str> = Vec::with_capacity(MAX_REASONS);
        for reason in &self.reasons {
            if unique.len() == MAX_REASONS {
                break;
            }
            if !unique.contains(&reason.as_str()) {
                unique.push(reason);
            }
        }
        unique.join(". ")
    }
}

pub struct RecommendationEngine {
    graph: Arc<CategoryGraph>,
}

impl RecommendationEngine {
    pub fn new(graph: Arc<CategoryGraph>) -> Self {
        Self { graph }
    }

    /// Rank up to [`MAX_RECOMMENDATIONS`] categories for a visit history.
    ///
    /// An empty history yields the fixed cold-start list. Already-visited
    /// categories are not filtered out; one is recommended again whenever
    /// another visited category relates to it.
    pub fn recommend(
        &self,
        history: &[String],
        preferences: Option<&Preferences>,
    ) -> Vec<Recommendation> {
        if history.is_empty() {
            return cold_start();
        }

        let mut candidates: HashMap<&str, Candidate> = HashMap::new();

        for (visited, count) in tally(history) {
            for related in self.graph.related(visited) {
                let candidate = candidates.entry(related.as_str()).or_default();
                candidate.score += count as f64 * SIMILARITY_WEIGHT;
                candidate.reasons.push(format!("Vì bạn thường đến {visited}"));
            }
        }

        for (category, candidate) in candidates.iter_mut() {
            candidate.score += self.graph.popularity(category) * POPULARITY_WEIGHT;
        }

        let budget = preferences.map(|p| p.budget).unwrap_or_default();
        if let Some((category, factor)) = budget.boost() {
            if let Some(candidate) = candidates.get_mut(category) {
                candidate.score *= factor;
            }
        }

        let mut ranked: Vec<Recommendation> = candidates
            .into_iter()
            .map(|(category, candidate)| Recommendation {
                category: category.to_string(),
                score: round_score(candidate.score),
                reason: candidate.reason(),
                name: display_name(category),
            })
            .collect();

        // Equal scores fall back to category name so output is reproducible.
        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.category.cmp(&b.category))
        });
        ranked.truncate(MAX_RECOMMENDATIONS);

        tracing::debug!(
            history_len = history.len(),
            budget = ?budget,
            returned = ranked.len(),
            "Computed POI recommendations"
        );

        ranked
    }
}

/// Visit counts per category, in order of first visit.
fn tally(history: &[String]) -> Vec<(&str, usize)> {
    let mut position: HashMap<&str, usize> = HashMap::with_capacity(history.len());
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for category in history {
        let category = category.as_str();
        match position.get(category) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(category, counts.len());
                counts.push((category, 1));
            }
        }
    }
    counts
}

fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Recommendations for a user with no history.
fn cold_start() -> Vec<Recommendation> {
    [
        ("restaurant", 1.0, "Địa điểm phổ biến nhất"),
        ("cafe", 0.9, "Thích hợp để thư giãn"),
        ("park", 0.8, "Không gian xanh mát"),
        ("supermarket", 0.7, "Tiện lợi mua sắm"),
        ("museum", 0.6, "Khám phá văn hóa"),
    ]
    .into_iter()
    .map(|(category, score, reason)| Recommendation {
        category: category.to_string(),
        score,
        reason: reason.to_string(),
        name: display_name(category),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(CategoryGraph::builtin()))
    }

    fn history(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn categories(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.category.as_str()).collect()
    }

    fn budget(value: &str) -> Preferences {
        Preferences {
            budget: Budget::parse(value),
        }
    }

    #[test]
    fn test_empty_history_returns_cold_start_list() {
        let recs = engine().recommend(&[], None);

        assert_eq!(
            categories(&recs),
            ["restaurant", "cafe", "park", "supermarket", "museum"]
        );
        let scores: Vec<f64> = recs.iter().map(|r| r.score).collect();
        assert_eq!(scores, [1.0, 0.9, 0.8, 0.7, 0.6]);
        assert_eq!(recs[0].reason, "Địa điểm phổ biến nhất");
        assert_eq!(recs[4].name, "Bảo tàng");
    }

    #[test]
    fn test_cold_start_ignores_preferences() {
        let recs = engine().recommend(&[], Some(&budget("high")));
        assert_eq!(recs[0].score, 1.0);
        assert_eq!(recs.len(), 5);
    }

    #[test]
    fn test_single_cafe_visit_recommends_its_neighbours() {
        let recs = engine().recommend(&history(&["cafe"]), None);

        assert_eq!(categories(&recs), ["restaurant", "park", "bakery"]);
        // 0.3 + popularity * 0.2
        assert_eq!(recs[0].score, 0.5);
        assert_eq!(recs[1].score, 0.46);
        assert_eq!(recs[2].score, 0.4);
        assert!(recs.iter().all(|r| r.reason == "Vì bạn thường đến cafe"));
        assert_eq!(recs[0].name, "Nhà hàng");
        assert_eq!(recs[2].name, "Bánh ngọt");
    }

    #[test]
    fn test_visit_count_scales_similarity() {
        let recs = engine().recommend(&history(&["museum", "museum", "museum"]), None);

        // viewpoint, theatre and library all score 3 * 0.3 + 0.5 * 0.2 = 1.0
        assert_eq!(categories(&recs), ["library", "theatre", "viewpoint"]);
        assert!(recs.iter().all(|r| r.score == 1.0));
    }

    #[test]
    fn test_high_budget_without_restaurant_candidate_is_noop() {
        let recs = engine().recommend(
            &history(&["restaurant", "restaurant"]),
            Some(&budget("high")),
        );

        assert!(!categories(&recs).contains(&"restaurant"));
        assert_eq!(categories(&recs), ["cafe", "bakery", "fast_food"]);
        assert_eq!(recs[0].score, 0.78);
        assert_eq!(recs[1].score, 0.7);
        assert_eq!(recs[2].score, 0.7);
    }

    #[test]
    fn test_high_budget_boosts_restaurant() {
        let plain = engine().recommend(&history(&["cafe"]), None);
        let boosted = engine().recommend(&history(&["cafe"]), Some(&budget("high")));

        assert_eq!(plain[0].score, 0.5);
        assert_eq!(boosted[0].category, "restaurant");
        assert_eq!(boosted[0].score, 0.65);
        assert_eq!(boosted[1].score, plain[1].score);
    }

    #[test]
    fn test_low_budget_boosts_fast_food_only() {
        let recs = engine().recommend(&history(&["restaurant"]), Some(&budget("low")));

        // cafe 0.3 + 0.18 = 0.48, fast_food (0.3 + 0.1) * 1.2 = 0.48, bakery 0.4
        assert_eq!(categories(&recs), ["cafe", "fast_food", "bakery"]);
        assert_eq!(recs[0].score, 0.48);
        assert_eq!(recs[1].score, 0.48);
        assert_eq!(recs[2].score, 0.4);
    }

    #[test]
    fn test_unknown_budget_behaves_like_medium() {
        let medium = engine().recommend(&history(&["cafe", "hotel"]), Some(&budget("medium")));
        let odd = engine().recommend(&history(&["cafe", "hotel"]), Some(&budget("lavish")));
        assert_eq!(medium, odd);
    }

    #[test]
    fn test_unknown_history_category_contributes_nothing() {
        let recs = engine().recommend(&history(&["karaoke"]), None);
        assert!(recs.is_empty());

        let recs = engine().recommend(&history(&["karaoke", "cafe"]), None);
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn test_result_is_capped_and_sorted() {
        let recs = engine().recommend(
            &history(&["restaurant", "cafe", "park", "museum", "hotel", "hospital"]),
            None,
        );

        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_visited_category_can_be_recommended() {
        let recs = engine().recommend(&history(&["cafe", "restaurant"]), None);
        let cats = categories(&recs);
        assert!(cats.contains(&"cafe"));
        assert!(cats.contains(&"restaurant"));
    }

    #[test]
    fn test_reasons_keep_first_seen_order_and_cap_at_two() {
        let recs = engine().recommend(&history(&["restaurant", "hotel", "park"]), None);

        let cafe = recs.iter().find(|r| r.category == "cafe").unwrap();
        assert_eq!(
            cafe.reason,
            "Vì bạn thường đến restaurant. Vì bạn thường đến hotel"
        );
    }

    #[test]
    fn test_equal_scores_are_ordered_by_category_name() {
        let graph = CategoryGraph::new().with_related("origin", &["zeta", "alpha", "mid"]);
        let engine = RecommendationEngine::new(Arc::new(graph));

        let recs = engine.recommend(&history(&["origin"]), None);

        assert_eq!(categories(&recs), ["alpha", "mid", "zeta"]);
        assert!(recs.iter().all(|r| r.score == 0.4));
    }

    #[test]
    fn test_recommendation_serializes_category_as_type() {
        let rec = &engine().recommend(&history(&["cafe"]), None)[0];
        let json = serde_json::to_value(rec).unwrap();
        assert_eq!(json["type"], "restaurant");
        assert_eq!(json["name"], "Nhà hàng");
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_tally_counts_in_first_seen_order() {
        let h = history(&["park", "cafe", "park"]);
        assert_eq!(tally(&h), [("park", 2), ("cafe", 1)]);
    }

    #[test]
    fn test_large_distinct_history_is_scored_quickly() {
        let mut h: Vec<String> = (0..100_000).map(|i| format!("c{i}")).collect();
        h.push("cafe".to_string());

        let started = std::time::Instant::now();
        let recs = engine().recommend(&h, None);

        assert!(started.elapsed() < std::time::Duration::from_secs(5));
        assert_eq!(categories(&recs), ["restaurant", "park", "bakery"]);
        assert_eq!(tally(&h).len(), 100_001);
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(0.45999999999999996), 0.46);
        assert_eq!(round_score(0.655), 0.66);
    }
}
