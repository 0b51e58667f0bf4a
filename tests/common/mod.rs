use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tripwise::config::ItineraryConfig;
use tripwise::models::{CandidatePlace, Coordinates};
use tripwise::services::places::PlacesLookup;
use tripwise::{AppError, Result};

/// Canned behavior for one interest
#[allow(dead_code)]
#[derive(Clone)]
pub enum MockResponse {
    Places(Vec<CandidatePlace>),
    Fail(String),
    /// Answers with the places after sleeping
    Delay(Duration, Vec<CandidatePlace>),
    /// Never answers within any reasonable timeout
    Hang,
}

/// Lookup client that answers from a table keyed by lowercased interest.
/// Interests missing from the table return no places.
#[derive(Default)]
pub struct MockLookup {
    responses: HashMap<String, MockResponse>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

/// Keeps the in-flight count honest when a search is dropped mid-sleep
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[allow(dead_code)]
impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, interest: &str, response: MockResponse) -> Self {
        self.responses.insert(interest.to_lowercase(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Most searches that were running at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlacesLookup for MockLookup {
    async fn search(&self, interest: &str, _center: &Coordinates) -> Result<Vec<CandidatePlace>> {
        self.calls.lock().unwrap().push(interest.to_string());
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(running, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        match self.responses.get(&interest.to_lowercase()).cloned() {
            Some(MockResponse::Places(places)) => Ok(places),
            Some(MockResponse::Fail(reason)) => Err(AppError::PlacesApi(reason)),
            Some(MockResponse::Delay(delay, places)) => {
                tokio::time::sleep(delay).await;
                Ok(places)
            }
            Some(MockResponse::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Create a test candidate
#[allow(dead_code)]
pub fn candidate(id: &str, lat: f64, lng: f64, rating: f32, reviews: u32) -> CandidatePlace {
    CandidatePlace::new(id, format!("Place {}", id), Coordinates::new(lat, lng).unwrap())
        .with_popularity(rating, reviews)
        .with_vicinity(format!("Test vicinity for {}", id))
}

/// Three well-reviewed candidates clustered around a point
#[allow(dead_code)]
pub fn cluster(prefix: &str, lat: f64, lng: f64) -> Vec<CandidatePlace> {
    (0..3)
        .map(|i| {
            candidate(
                &format!("{}-{}", prefix, i),
                lat + i as f64 * 0.01,
                lng,
                4.5,
                100 + i * 10,
            )
        })
        .collect()
}

/// Get test configuration
#[allow(dead_code)]
pub fn test_config() -> ItineraryConfig {
    ItineraryConfig {
        lookup_timeout: Duration::from_millis(200),
        ..ItineraryConfig::default()
    }
}

#[allow(dead_code)]
pub fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
