use crate::error::Result;
use crate::models::itinerary::GenerateItineraryRequest;
use crate::models::{InterestProfile, TripRecord, INTEREST_CATALOG};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

/// POST /itineraries
/// Generate an itinerary for the selected interests and record it as a trip
pub async fn create_itinerary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateItineraryRequest>,
) -> Result<(StatusCode, Json<TripRecord>)> {
    tracing::info!(
        interests = ?request.interests,
        "Itinerary request for {} interest(s)",
        request.interests.len()
    );

    let itinerary = state
        .itinerary_generator
        .generate(&request.interests)
        .await?;

    let record = state.ledger.record(itinerary).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /interests
/// The interests a user can pick from
pub async fn list_interests() -> Json<&'static [InterestProfile]> {
    Json(INTEREST_CATALOG)
}
