use crate::error::{AppError, Result};
use crate::models::{CheckIn, Itinerary, JournalEntry, TripRecord, TripStats, TripStatus};
use async_trait::async_trait;
use std::collections::HashMap;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Store of generated, saved and completed trips.
///
/// Itineraries are treated as values: a check-in replaces the stored
/// itinerary with an updated copy rather than mutating the one the generator
/// returned.
#[async_trait]
pub trait TripLedger: Send + Sync {
    async fn record(&self, itinerary: Itinerary) -> Result<TripRecord>;

    async fn get(&self, id: Uuid) -> Result<TripRecord>;

    /// Newest first, optionally restricted to one status.
    async fn list(&self, status: Option<TripStatus>) -> Result<Vec<TripRecord>>;

    async fn save(&self, id: Uuid) -> Result<TripRecord>;

    async fn check_in(&self, id: Uuid, position: u32, check_in: CheckIn) -> Result<TripRecord>;

    async fn complete(&self, id: Uuid) -> Result<TripRecord>;

    async fn set_favorite(&self, id: Uuid, favorite: bool) -> Result<TripRecord>;

    async fn stats(&self) -> Result<TripStats>;
}

#[derive(Default)]
pub struct InMemoryTripLedger {
    trips: RwLock<HashMap<Uuid, TripRecord>>,
}

impl InMemoryTripLedger {
    pub fn new() -> Self {
        Self::default()
    }

    async fn update<F>(&self, id: Uuid, apply: F) -> Result<TripRecord>
    where
        F: FnOnce(&mut TripRecord) -> Result<()> + Send,
    {
        let mut trips = self.trips.write().await;
        let record = trips
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", id)))?;
        apply(record)?;
        Ok(record.clone())
    }
}

fn mark_completed(record: &mut TripRecord, now: OffsetDateTime) {
    record.status = TripStatus::Completed;
    if record.completed_at.is_none() {
        record.completed_at = Some(now);
    }
}

#[async_trait]
impl TripLedger for InMemoryTripLedger {
    async fn record(&self, itinerary: Itinerary) -> Result<TripRecord> {
        let record = TripRecord::new(itinerary);
        let mut trips = self.trips.write().await;
        if trips.contains_key(&record.id()) {
            return Err(AppError::InvalidRequest(format!(
                "Trip {} already recorded",
                record.id()
            )));
        }
        trips.insert(record.id(), record.clone());
        tracing::debug!(trip_id = %record.id(), "Recorded generated trip");
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<TripRecord> {
        self.trips
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Trip {} not found", id)))
    }

    async fn list(&self, status: Option<TripStatus>) -> Result<Vec<TripRecord>> {
        let trips = self.trips.read().await;
        let mut records: Vec<TripRecord> = trips
            .values()
            .filter(|record| status.map_or(true, |s| record.status == s))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.itinerary.created_at.cmp(&a.itinerary.created_at));
        Ok(records)
    }

    async fn save(&self, id: Uuid) -> Result<TripRecord> {
        self.update(id, |record| {
            if record.status == TripStatus::Generated {
                record.status = TripStatus::Saved;
            }
            Ok(())
        })
        .await
    }

    async fn check_in(&self, id: Uuid, position: u32, check_in: CheckIn) -> Result<TripRecord> {
        check_in.validate().map_err(AppError::InvalidRequest)?;

        let record = self
            .update(id, move |record| {
                let now = OffsetDateTime::now_utc();
                let mut itinerary = record.itinerary.clone();

                let stop = itinerary
                    .stops
                    .get_mut(position as usize)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Stop {} not found in trip {}", position, id))
                    })?;

                if stop.checked_in {
                    return Err(AppError::InvalidRequest(format!(
                        "Already checked in at '{}'",
                        stop.name
                    )));
                }

                stop.checked_in = true;
                stop.checked_in_at = Some(now);
                let stop_name = stop.name.clone();

                record.itinerary = itinerary;
                record.journal.push(JournalEntry {
                    position,
                    stop_name,
                    check_in,
                    recorded_at: now,
                });

                if record.itinerary.is_fully_checked_in() {
                    mark_completed(record, now);
                } else {
                    record.status = TripStatus::InProgress;
                }
                Ok(())
            })
            .await?;

        tracing::info!(
            trip_id = %id,
            position = position,
            status = %record.status,
            "Checked in at stop {} ({}/{} visited)",
            position,
            record.itinerary.checked_in_count(),
            record.itinerary.stop_count()
        );

        Ok(record)
    }

    async fn complete(&self, id: Uuid) -> Result<TripRecord> {
        self.update(id, |record| {
            mark_completed(record, OffsetDateTime::now_utc());
            Ok(())
        })
        .await
    }

    async fn set_favorite(&self, id: Uuid, favorite: bool) -> Result<TripRecord> {
        self.update(id, |record| {
            record.favorite = favorite;
            Ok(())
        })
        .await
    }

    async fn stats(&self) -> Result<TripStats> {
        let trips = self.trips.read().await;
        let mut stats = TripStats {
            total_trips: trips.len(),
            ..TripStats::default()
        };

        let mut rating_sum = 0u32;
        let mut rating_count = 0u32;
        let mut interest_counts: HashMap<&str, usize> = HashMap::new();

        for record in trips.values() {
            match record.status {
                TripStatus::Saved => stats.saved_trips += 1,
                TripStatus::Completed => {
                    stats.completed_trips += 1;
                    stats.completed_distance_km += record.itinerary.total_distance_km;
                    stats.completed_duration_minutes += record.itinerary.total_duration_minutes;
                }
                TripStatus::Generated | TripStatus::InProgress => {}
            }
            if record.favorite {
                stats.favorite_trips += 1;
            }
            stats.stops_visited += record.itinerary.checked_in_count();

            for entry in &record.journal {
                if let Some(rating) = entry.check_in.rating {
                    rating_sum += rating as u32;
                    rating_count += 1;
                }
            }
            for interest in &record.itinerary.interests {
                *interest_counts.entry(interest.as_str()).or_default() += 1;
            }
        }

        if rating_count > 0 {
            stats.average_rating = Some(rating_sum as f64 / rating_count as f64);
        }
        // Highest count wins; alphabetical among equals keeps it stable
        stats.top_interest = interest_counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(interest, _)| interest.to_string());

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidatePlace, Coordinates, Stop};

    fn itinerary(interests: &[&str], stop_count: usize) -> Itinerary {
        let stops = (0..stop_count)
            .map(|i| {
                let place = CandidatePlace::new(
                    format!("p{}", i),
                    format!("Stop {}", i),
                    Coordinates::new(32.7 + i as f64 * 0.01, -117.2).unwrap(),
                );
                let mut stop = Stop::from_candidate(place, interests[0]);
                stop.position = i as u32;
                stop
            })
            .collect::<Vec<_>>();

        Itinerary {
            id: Uuid::new_v4(),
            title: "Test".to_string(),
            description: String::new(),
            total_distance_km: 2.0,
            total_duration_minutes: stops.iter().map(|s| s.dwell_minutes).sum(),
            stops,
            interests: interests.iter().map(|s| s.to_string()).collect(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn rated(rating: u8) -> CheckIn {
        CheckIn {
            note: Some("Great views".to_string()),
            photos: vec!["file:///photos/1.jpg".to_string()],
            rating: Some(rating),
        }
    }

    #[tokio::test]
    async fn test_record_and_get() {
        let ledger = InMemoryTripLedger::new();
        let record = ledger.record(itinerary(&["Beaches"], 2)).await.unwrap();
        assert_eq!(record.status, TripStatus::Generated);

        let fetched = ledger.get(record.id()).await.unwrap();
        assert_eq!(fetched.itinerary.id, record.id());
        assert!(matches!(
            ledger.get(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_record_rejects_duplicate_id() {
        let ledger = InMemoryTripLedger::new();
        let trip = itinerary(&["Beaches"], 1);
        ledger.record(trip.clone()).await.unwrap();
        assert!(ledger.record(trip).await.is_err());
    }

    #[tokio::test]
    async fn test_check_in_updates_copy_and_journal() {
        let ledger = InMemoryTripLedger::new();
        let original = itinerary(&["Beaches"], 2);
        let id = ledger.record(original.clone()).await.unwrap().id();

        let record = ledger.check_in(id, 0, rated(5)).await.unwrap();
        assert_eq!(record.status, TripStatus::InProgress);
        assert!(record.itinerary.stops[0].checked_in);
        assert!(record.itinerary.stops[0].checked_in_at.is_some());
        assert!(!record.itinerary.stops[1].checked_in);
        assert_eq!(record.journal.len(), 1);
        assert_eq!(record.journal[0].stop_name, "Stop 0");

        // The caller's copy is untouched
        assert!(!original.stops[0].checked_in);
    }

    #[tokio::test]
    async fn test_checking_in_everywhere_completes_trip() {
        let ledger = InMemoryTripLedger::new();
        let id = ledger.record(itinerary(&["Food"], 2)).await.unwrap().id();

        ledger.check_in(id, 1, CheckIn::default()).await.unwrap();
        let record = ledger.check_in(id, 0, CheckIn::default()).await.unwrap();
        assert_eq!(record.status, TripStatus::Completed);
        assert!(record.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_check_in_errors() {
        let ledger = InMemoryTripLedger::new();
        let id = ledger.record(itinerary(&["Food"], 2)).await.unwrap().id();

        assert!(matches!(
            ledger.check_in(id, 5, CheckIn::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            ledger.check_in(id, 0, rated(9)).await,
            Err(AppError::InvalidRequest(_))
        ));

        ledger.check_in(id, 0, CheckIn::default()).await.unwrap();
        assert!(matches!(
            ledger.check_in(id, 0, CheckIn::default()).await,
            Err(AppError::InvalidRequest(_))
        ));
        // Failed attempts leave no journal entries behind
        assert_eq!(ledger.get(id).await.unwrap().journal.len(), 1);
    }

    #[tokio::test]
    async fn test_save_does_not_reopen_completed_trip() {
        let ledger = InMemoryTripLedger::new();
        let id = ledger.record(itinerary(&["Art"], 1)).await.unwrap().id();

        assert_eq!(ledger.save(id).await.unwrap().status, TripStatus::Saved);
        ledger.complete(id).await.unwrap();
        assert_eq!(ledger.save(id).await.unwrap().status, TripStatus::Completed);
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let ledger = InMemoryTripLedger::new();
        let saved = ledger.record(itinerary(&["Art"], 1)).await.unwrap().id();
        ledger.record(itinerary(&["Food"], 1)).await.unwrap();
        ledger.save(saved).await.unwrap();

        assert_eq!(ledger.list(None).await.unwrap().len(), 2);
        let only_saved = ledger.list(Some(TripStatus::Saved)).await.unwrap();
        assert_eq!(only_saved.len(), 1);
        assert_eq!(only_saved[0].id(), saved);
    }

    #[tokio::test]
    async fn test_stats() {
        let ledger = InMemoryTripLedger::new();
        let first = ledger.record(itinerary(&["Beaches", "Food"], 2)).await.unwrap().id();
        let second = ledger.record(itinerary(&["Beaches"], 1)).await.unwrap().id();
        ledger.record(itinerary(&["Art"], 1)).await.unwrap();

        ledger.check_in(first, 0, rated(4)).await.unwrap();
        ledger.check_in(first, 1, rated(5)).await.unwrap();
        ledger.save(second).await.unwrap();
        ledger.set_favorite(second, true).await.unwrap();

        let stats = ledger.stats().await.unwrap();
        assert_eq!(stats.total_trips, 3);
        assert_eq!(stats.completed_trips, 1);
        assert_eq!(stats.saved_trips, 1);
        assert_eq!(stats.favorite_trips, 1);
        assert_eq!(stats.stops_visited, 2);
        assert_eq!(stats.completed_distance_km, 2.0);
        assert_eq!(stats.completed_duration_minutes, 240);
        assert_eq!(stats.average_rating, Some(4.5));
        assert_eq!(stats.top_interest.as_deref(), Some("Beaches"));
    }

    #[test]
    fn test_empty_stats() {
        let ledger = InMemoryTripLedger::new();
        let stats = tokio_test::block_on(ledger.stats()).unwrap();
        assert_eq!(stats, TripStats::default());
    }
}
