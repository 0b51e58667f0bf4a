use crate::constants::{MAX_CHECK_IN_RATING, MIN_CHECK_IN_RATING};
use crate::models::Itinerary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    Generated,
    Saved,
    InProgress,
    Completed,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripStatus::Generated => write!(f, "generated"),
            TripStatus::Saved => write!(f, "saved"),
            TripStatus::InProgress => write!(f, "in_progress"),
            TripStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generated" => Ok(TripStatus::Generated),
            "saved" => Ok(TripStatus::Saved),
            "in_progress" | "in-progress" => Ok(TripStatus::InProgress),
            "completed" => Ok(TripStatus::Completed),
            _ => Err(format!("Invalid trip status: '{}'", s)),
        }
    }
}

/// What the traveller records when arriving at a stop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckIn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Photo references (URIs) taken at the stop
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl CheckIn {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(rating) = self.rating {
            if !(MIN_CHECK_IN_RATING..=MAX_CHECK_IN_RATING).contains(&rating) {
                return Err(format!(
                    "rating must be between {} and {}",
                    MIN_CHECK_IN_RATING, MAX_CHECK_IN_RATING
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub position: u32,
    pub stop_name: String,
    #[serde(flatten)]
    pub check_in: CheckIn,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

/// An itinerary as the ledger tracks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub itinerary: Itinerary,
    pub status: TripStatus,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

impl TripRecord {
    pub fn new(itinerary: Itinerary) -> Self {
        TripRecord {
            itinerary,
            status: TripStatus::Generated,
            favorite: false,
            journal: Vec::new(),
            completed_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.itinerary.id
    }
}

/// Aggregates over everything in the ledger.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TripStats {
    pub total_trips: usize,
    pub saved_trips: usize,
    pub completed_trips: usize,
    pub favorite_trips: usize,
    pub stops_visited: usize,
    pub completed_distance_km: f64,
    pub completed_duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_interest: Option<String>,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub favorite: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct TripListQuery {
    #[serde(default)]
    pub status: Option<String>,
}

impl TripListQuery {
    pub fn status_filter(&self) -> Result<Option<TripStatus>, String> {
        self.status.as_deref().map(|s| s.parse::<TripStatus>()).transpose()
    }
}
