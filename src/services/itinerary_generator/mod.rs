pub mod route_sequencer;
pub mod stop_ranker;
mod summary;

use crate::config::ItineraryConfig;
use crate::error::{AppError, Result};
use crate::models::interest::find_interest;
use crate::models::{CandidatePlace, Itinerary, Stop};
use crate::services::places::PlacesLookup;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

use stop_ranker::StopRanker;

/// What one interest's lookup produced. Collected for every interest before
/// any ranking happens, so a failure is a value to inspect, not an early exit.
#[derive(Debug)]
struct InterestOutcome {
    interest: String,
    result: Result<Vec<CandidatePlace>>,
}

/// Turns interest labels into a ranked, sequenced itinerary.
pub struct ItineraryGenerator {
    lookup: Arc<dyn PlacesLookup>,
    ranker: StopRanker,
    config: ItineraryConfig,
}

impl ItineraryGenerator {
    pub fn new(lookup: Arc<dyn PlacesLookup>, config: ItineraryConfig) -> Self {
        ItineraryGenerator {
            lookup,
            ranker: StopRanker::new(config.min_review_count),
            config,
        }
    }

    pub fn config(&self) -> &ItineraryConfig {
        &self.config
    }

    /// Generate one itinerary for `interests`.
    ///
    /// Each interest is looked up independently; a failed or timed-out lookup
    /// is logged and skipped. The only failures surfaced are an empty
    /// selection (rejected before any lookup) and an empty stop pool.
    /// Dropping the returned future abandons all in-flight lookups and
    /// produces nothing.
    pub async fn generate(&self, interests: &[String]) -> Result<Itinerary> {
        let interests = normalize_interests(interests);
        if interests.is_empty() {
            return Err(AppError::InvalidInterestSelection);
        }

        tracing::info!(
            interests = ?interests,
            region = %self.config.home_region_name,
            "Generating itinerary for {} interest(s) around {}",
            interests.len(), self.config.home_region_name
        );

        let outcomes = self.fetch_all(&interests).await;
        let pool = self.collect_stops(outcomes);

        if pool.is_empty() {
            tracing::warn!(
                interests = ?interests,
                "No eligible places found for any selected interest"
            );
            return Err(AppError::NoPlacesFound);
        }

        let stops = route_sequencer::sequence(pool);
        let total_distance_km = route_sequencer::total_distance_km(&stops);
        let total_duration_minutes: u32 = stops.iter().map(|stop| stop.dwell_minutes).sum();

        let itinerary = Itinerary {
            id: Uuid::new_v4(),
            title: summary::title_for(&interests),
            description: summary::description_for(
                &interests,
                &self.config.home_region_name,
                stops.len(),
            ),
            stops,
            total_distance_km,
            total_duration_minutes,
            interests,
            created_at: OffsetDateTime::now_utc(),
        };

        tracing::info!(
            itinerary_id = %itinerary.id,
            stops = itinerary.stops.len(),
            distance_km = %format!("{:.2}", itinerary.total_distance_km),
            duration_min = itinerary.total_duration_minutes,
            "Generated '{}': {} stops, {:.2}km, {}min",
            itinerary.title, itinerary.stops.len(),
            itinerary.total_distance_km, itinerary.total_duration_minutes
        );

        Ok(itinerary)
    }

    /// Bounded fan-out over the lookup client. Outcomes come back in the
    /// caller's interest order regardless of completion order.
    async fn fetch_all(&self, interests: &[String]) -> Vec<InterestOutcome> {
        stream::iter(interests.iter().cloned())
            .map(|interest| self.fetch_interest(interest))
            .buffered(self.config.max_concurrent_lookups.max(1))
            .collect()
            .await
    }

    async fn fetch_interest(&self, interest: String) -> InterestOutcome {
        let search = self.lookup.search(&interest, &self.config.home);

        let result = match tokio::time::timeout(self.config.lookup_timeout, search).await {
            Ok(Ok(places)) => Ok(places),
            Ok(Err(e)) => Err(AppError::LookupFailed {
                interest: interest.clone(),
                reason: e.to_string(),
            }),
            Err(_) => Err(AppError::LookupFailed {
                interest: interest.clone(),
                reason: format!(
                    "timed out after {}ms",
                    self.config.lookup_timeout.as_millis()
                ),
            }),
        };

        InterestOutcome { interest, result }
    }

    /// Rank each successful outcome and pool the winners. A place already
    /// pooled under an earlier interest is not added twice.
    fn collect_stops(&self, outcomes: Vec<InterestOutcome>) -> Vec<Stop> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut pool = Vec::new();

        for outcome in outcomes {
            let candidates = match outcome.result {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::warn!(
                        interest = %outcome.interest,
                        error = %e,
                        "Skipping interest after failed lookup"
                    );
                    continue;
                }
            };

            let ranked = self.ranker.rank(
                &candidates,
                &outcome.interest,
                self.config.max_stops_per_interest,
            );

            for place in ranked {
                if !seen.insert(place.id.clone()) {
                    tracing::debug!(
                        place_id = %place.id,
                        interest = %outcome.interest,
                        "Place already selected under another interest"
                    );
                    continue;
                }
                pool.push(Stop::from_candidate(place, &outcome.interest));
            }
        }

        pool
    }
}

/// Trim, drop blanks, use catalog spelling where the label is known, and
/// drop repeats (case-insensitive) keeping the first.
fn normalize_interests(interests: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    interests
        .iter()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .map(|label| {
            find_interest(label)
                .map(|profile| profile.label.to_string())
                .unwrap_or_else(|| label.to_string())
        })
        .filter(|label| seen.insert(label.to_lowercase()))
        .collect()
}
