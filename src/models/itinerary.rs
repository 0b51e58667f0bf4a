use crate::models::Stop;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Visiting order; `stops[i].position == i`
    pub stops: Vec<Stop>,
    /// Sum of straight-line distances between consecutive stops
    pub total_distance_km: f64,
    /// Sum of stop dwell times. Travel time between stops is not included.
    pub total_duration_minutes: u32,
    pub interests: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Itinerary {
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn stop_at(&self, position: u32) -> Option<&Stop> {
        self.stops.get(position as usize)
    }

    pub fn checked_in_count(&self) -> usize {
        self.stops.iter().filter(|stop| stop.checked_in).count()
    }

    pub fn is_fully_checked_in(&self) -> bool {
        !self.stops.is_empty() && self.stops.iter().all(|stop| stop.checked_in)
    }
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct GenerateItineraryRequest {
    #[serde(default)]
    pub interests: Vec<String>,
}
