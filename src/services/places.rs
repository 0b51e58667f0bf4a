use crate::error::Result;
use crate::models::{CandidatePlace, Coordinates};
use async_trait::async_trait;

/// Directory search the itinerary generator fans out over, one call per
/// interest. Implementations may fail or be slow for any single interest;
/// the generator treats every call as independent.
#[async_trait]
pub trait PlacesLookup: Send + Sync {
    async fn search(&self, interest: &str, center: &Coordinates) -> Result<Vec<CandidatePlace>>;
}
