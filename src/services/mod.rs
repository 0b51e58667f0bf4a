pub mod itinerary_generator;
pub mod lookup_cache;
pub mod places;
pub mod places_client;
pub mod trip_ledger;
