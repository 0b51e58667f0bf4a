//! Stable application-wide constants.
//!
//! Values here are structural invariants and default fallbacks for
//! env-var-based configuration. For the knobs that shape a generation run,
//! see [`ItineraryConfig`](crate::config::ItineraryConfig).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Home region (the fixed search center) ---

pub const DEFAULT_HOME_LAT: f64 = 32.7157;
pub const DEFAULT_HOME_LNG: f64 = -117.1611;
pub const DEFAULT_HOME_REGION_NAME: &str = "San Diego";

// --- Itinerary generation ---

/// Search radius around the home coordinate for every interest lookup.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 50.0;
/// Stops kept per interest after ranking.
pub const DEFAULT_MAX_STOPS_PER_INTEREST: usize = 3;
/// A candidate needs strictly more reviews than this to be ranked at all.
/// Keeps a 5.0 rating from two reviews out of the itinerary.
pub const DEFAULT_MIN_REVIEW_COUNT: u32 = 10;
/// Upper bound on a single interest lookup before it counts as failed.
pub const DEFAULT_LOOKUP_TIMEOUT_SECONDS: u64 = 10;
/// Interest lookups in flight at once during the fan-out.
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 4;

/// Dwell time for interests missing from the catalog.
pub const DEFAULT_DWELL_MINUTES: u32 = 60;

/// Title used once three or more interests are selected.
pub const MULTI_INTEREST_TITLE: &str = "Ultimate Multi-Interest Journey";

// --- Lookup cache ---

/// Default lookup cache TTL: 1 hour. Overridden by `LOOKUP_CACHE_TTL`.
pub const DEFAULT_LOOKUP_CACHE_TTL_SECONDS: u64 = 3_600;
/// Maximum cached (interest, center) entries.
pub const DEFAULT_LOOKUP_CACHE_MAX_ENTRIES: u64 = 500;
/// Decimal places kept from the center when building cache keys (~100m).
pub const LOOKUP_CACHE_COORD_PRECISION: u32 = 3;

// --- Trip ledger ---

pub const MIN_CHECK_IN_RATING: u8 = 1;
pub const MAX_CHECK_IN_RATING: u8 = 5;
