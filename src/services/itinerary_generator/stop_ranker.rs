use crate::models::CandidatePlace;
use std::cmp::Ordering;

/// Scores and truncates the candidates returned for one interest.
#[derive(Debug, Clone)]
pub struct StopRanker {
    min_review_count: u32,
}

impl StopRanker {
    pub fn new(min_review_count: u32) -> Self {
        Self { min_review_count }
    }

    /// Top `max_count` candidates by `rating * review_count`.
    ///
    /// Candidates without a rating, or with `min_review_count` reviews or
    /// fewer, are dropped before scoring. The sort is stable, so equal
    /// scores keep the provider's order.
    pub fn rank(
        &self,
        candidates: &[CandidatePlace],
        interest: &str,
        max_count: usize,
    ) -> Vec<CandidatePlace> {
        let mut scored: Vec<(f64, &CandidatePlace)> = candidates
            .iter()
            .filter(|place| place.review_count.is_some_and(|n| n > self.min_review_count))
            .filter_map(|place| place.popularity_score().map(|score| (score, place)))
            .collect();

        // Sort by score descending
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        tracing::debug!(
            interest = %interest,
            candidates = candidates.len(),
            eligible = scored.len(),
            "Ranked {} of {} candidates for '{}'",
            scored.len().min(max_count), candidates.len(), interest
        );

        scored
            .into_iter()
            .take(max_count)
            .map(|(_, place)| place.clone())
            .collect()
    }
}
