use crate::models::interest::{dwell_minutes_for, visit_type_for};
use crate::models::{CandidatePlace, Coordinates, VisitType};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A place promoted into an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stop {
    pub place_id: String,
    pub name: String,
    pub vicinity: String,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    pub categories: Vec<String>,
    /// Interest label whose lookup produced this stop
    pub interest: String,
    pub visit_type: VisitType,
    pub dwell_minutes: u32,
    /// Zero-based index in the visiting sequence
    pub position: u32,
    #[serde(default)]
    pub checked_in: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub checked_in_at: Option<OffsetDateTime>,
}

impl Stop {
    /// Promote a ranked candidate, deriving visit type and dwell time from
    /// the interest it was found under. Position is assigned by sequencing.
    pub fn from_candidate(place: CandidatePlace, interest: &str) -> Self {
        Stop {
            place_id: place.id,
            name: place.name,
            vicinity: place.vicinity,
            coordinates: place.coordinates,
            rating: place.rating,
            review_count: place.review_count,
            categories: place.categories,
            interest: interest.to_string(),
            visit_type: visit_type_for(interest),
            dwell_minutes: dwell_minutes_for(interest),
            position: 0,
            checked_in: false,
            checked_in_at: None,
        }
    }

    pub fn distance_to(&self, other: &Stop) -> f64 {
        self.coordinates.distance_to(&other.coordinates)
    }
}
