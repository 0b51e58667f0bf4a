use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// An unranked search result from the places provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidatePlace {
    /// Opaque provider identifier
    pub id: String,
    pub name: String,
    /// Free-text address or neighborhood description
    #[serde(default)]
    pub vicinity: String,
    pub coordinates: Coordinates,
    /// 0.0 - 5.0 when the provider has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    /// Provider category tags
    #[serde(default)]
    pub categories: Vec<String>,
}

impl CandidatePlace {
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinates: Coordinates) -> Self {
        CandidatePlace {
            id: id.into(),
            name: name.into(),
            vicinity: String::new(),
            coordinates,
            rating: None,
            review_count: None,
            categories: Vec::new(),
        }
    }

    pub fn with_popularity(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = Some(rating);
        self.review_count = Some(review_count);
        self
    }

    pub fn with_vicinity(mut self, vicinity: impl Into<String>) -> Self {
        self.vicinity = vicinity.into();
        self
    }

    /// `rating * review_count`, or `None` when either signal is missing.
    /// Deliberately unnormalized: a well-reviewed 4.2 beats a lightly
    /// reviewed 5.0.
    pub fn popularity_score(&self) -> Option<f64> {
        match (self.rating, self.review_count) {
            (Some(rating), Some(reviews)) => Some(rating as f64 * reviews as f64),
            _ => None,
        }
    }
}
