pub mod debug;
pub mod itineraries;
pub mod trips;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/itineraries", post(itineraries::create_itinerary))
        .route("/interests", get(itineraries::list_interests))
        .route("/trips", get(trips::list_trips))
        .route("/trips/stats", get(trips::trip_stats))
        .route("/trips/{id}", get(trips::get_trip))
        .route("/trips/{id}/save", post(trips::save_trip))
        .route("/trips/{id}/complete", post(trips::complete_trip))
        .route("/trips/{id}/favorite", put(trips::set_favorite))
        .route(
            "/trips/{id}/stops/{position}/check-in",
            post(trips::check_in),
        )
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
