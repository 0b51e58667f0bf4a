// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use services::itinerary_generator::ItineraryGenerator;
use services::trip_ledger::TripLedger;
use std::sync::Arc;

pub struct AppState {
    pub itinerary_generator: ItineraryGenerator,
    pub ledger: Arc<dyn TripLedger>,
}
