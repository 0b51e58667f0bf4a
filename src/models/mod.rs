pub mod coordinates;
pub mod interest;
pub mod itinerary;
pub mod place;
pub mod stop;
pub mod trip;

pub use coordinates::Coordinates;
pub use interest::{InterestProfile, VisitType, INTEREST_CATALOG};
pub use itinerary::Itinerary;
pub use place::CandidatePlace;
pub use stop::Stop;
pub use trip::{CheckIn, JournalEntry, TripRecord, TripStats, TripStatus};
