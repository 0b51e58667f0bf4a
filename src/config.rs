use crate::constants::*;
use crate::models::Coordinates;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub places_api_key: String,
    /// Override for the places endpoint (proxy or local stub)
    pub places_base_url: Option<String>,
    pub lookup_cache_ttl: u64,
    pub itinerary: ItineraryConfig,
}

#[derive(Debug, Clone)]
pub struct ItineraryConfig {
    /// Fixed center every interest lookup searches around
    pub home: Coordinates,

    /// Human-readable name of the home region, used in descriptions
    pub home_region_name: String,

    /// Search radius handed to the places provider
    pub search_radius_km: f64,

    /// Stops kept per interest after ranking
    pub max_stops_per_interest: usize,

    /// Candidates need strictly more reviews than this to be eligible
    pub min_review_count: u32,

    /// Per-interest lookup budget; exceeding it counts as a failed lookup
    pub lookup_timeout: Duration,

    /// Interest lookups in flight at once
    pub max_concurrent_lookups: usize,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            home: Coordinates {
                lat: DEFAULT_HOME_LAT,
                lng: DEFAULT_HOME_LNG,
            },
            home_region_name: DEFAULT_HOME_REGION_NAME.to_string(),
            search_radius_km: DEFAULT_SEARCH_RADIUS_KM,
            max_stops_per_interest: DEFAULT_MAX_STOPS_PER_INTEREST,
            min_review_count: DEFAULT_MIN_REVIEW_COUNT,
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECONDS),
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
        }
    }
}

impl ItineraryConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let home_lat: f64 = env::var("HOME_LAT")
            .unwrap_or_else(|_| defaults.home.lat.to_string())
            .parse()
            .map_err(|_| "Invalid HOME_LAT")?;

        let home_lng: f64 = env::var("HOME_LNG")
            .unwrap_or_else(|_| defaults.home.lng.to_string())
            .parse()
            .map_err(|_| "Invalid HOME_LNG")?;

        let home = Coordinates::new(home_lat, home_lng)?;

        let search_radius_km: f64 = env::var("SEARCH_RADIUS_KM")
            .unwrap_or_else(|_| defaults.search_radius_km.to_string())
            .parse()
            .map_err(|_| "Invalid SEARCH_RADIUS_KM")?;

        if !(search_radius_km > 0.0 && search_radius_km <= 50.0) {
            return Err("SEARCH_RADIUS_KM must be between 0 and 50 km".to_string());
        }

        let max_stops_per_interest: usize = env::var("MAX_STOPS_PER_INTEREST")
            .unwrap_or_else(|_| defaults.max_stops_per_interest.to_string())
            .parse()
            .map_err(|_| "Invalid MAX_STOPS_PER_INTEREST")?;

        if max_stops_per_interest == 0 {
            return Err("MAX_STOPS_PER_INTEREST must be positive".to_string());
        }

        let lookup_timeout_secs: u64 = env::var("LOOKUP_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.lookup_timeout.as_secs().to_string())
            .parse()
            .map_err(|_| "Invalid LOOKUP_TIMEOUT_SECS")?;

        if lookup_timeout_secs == 0 {
            return Err("LOOKUP_TIMEOUT_SECS must be positive".to_string());
        }

        let max_concurrent_lookups: usize = env::var("MAX_CONCURRENT_LOOKUPS")
            .unwrap_or_else(|_| defaults.max_concurrent_lookups.to_string())
            .parse()
            .map_err(|_| "Invalid MAX_CONCURRENT_LOOKUPS")?;

        if max_concurrent_lookups == 0 {
            return Err("MAX_CONCURRENT_LOOKUPS must be positive".to_string());
        }

        Ok(Self {
            home,
            home_region_name: env::var("HOME_REGION_NAME")
                .unwrap_or(defaults.home_region_name),
            search_radius_km,
            max_stops_per_interest,
            min_review_count: env::var("MIN_REVIEW_COUNT")
                .unwrap_or_else(|_| defaults.min_review_count.to_string())
                .parse()
                .map_err(|_| "Invalid MIN_REVIEW_COUNT")?,
            lookup_timeout: Duration::from_secs(lookup_timeout_secs),
            max_concurrent_lookups,
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            places_api_key: env::var("PLACES_API_KEY")
                .map_err(|_| "PLACES_API_KEY must be set")?,
            places_base_url: env::var("PLACES_BASE_URL").ok().filter(|s| !s.is_empty()),
            lookup_cache_ttl: env::var("LOOKUP_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_LOOKUP_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid LOOKUP_CACHE_TTL")?,
            itinerary: ItineraryConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ITINERARY_VARS: &[&str] = &[
        "HOME_LAT",
        "HOME_LNG",
        "HOME_REGION_NAME",
        "SEARCH_RADIUS_KM",
        "MAX_STOPS_PER_INTEREST",
        "MIN_REVIEW_COUNT",
        "LOOKUP_TIMEOUT_SECS",
        "MAX_CONCURRENT_LOOKUPS",
    ];

    fn clear_env() {
        for var in ITINERARY_VARS {
            env::remove_var(var);
        }
    }

    fn set_env(key: &str, value: &str) {
        env::set_var(key, value);
    }

    #[test]
    #[serial]
    fn test_itinerary_config_defaults() {
        clear_env();
        let config = ItineraryConfig::from_env().unwrap();
        assert_eq!(config.search_radius_km, 50.0);
        assert_eq!(config.max_stops_per_interest, 3);
        assert_eq!(config.min_review_count, 10);
        assert_eq!(config.home_region_name, DEFAULT_HOME_REGION_NAME);
    }

    #[test]
    #[serial]
    fn test_itinerary_config_overrides() {
        clear_env();
        set_env("HOME_LAT", "21.3069");
        set_env("HOME_LNG", "-157.8583");
        set_env("HOME_REGION_NAME", "Honolulu");
        set_env("MAX_STOPS_PER_INTEREST", "5");

        let config = ItineraryConfig::from_env().unwrap();
        assert_eq!(config.home.lat, 21.3069);
        assert_eq!(config.home_region_name, "Honolulu");
        assert_eq!(config.max_stops_per_interest, 5);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_itinerary_config_rejects_bad_values() {
        clear_env();
        set_env("HOME_LAT", "123.0");
        assert!(ItineraryConfig::from_env().is_err());
        clear_env();

        set_env("SEARCH_RADIUS_KM", "0");
        assert!(ItineraryConfig::from_env().is_err());
        clear_env();

        set_env("SEARCH_RADIUS_KM", "NaN");
        let err = ItineraryConfig::from_env().unwrap_err();
        assert!(err.contains("SEARCH_RADIUS_KM"));
        clear_env();

        set_env("LOOKUP_TIMEOUT_SECS", "0");
        let err = ItineraryConfig::from_env().unwrap_err();
        assert!(err.contains("LOOKUP_TIMEOUT_SECS"));
        clear_env();

        set_env("MAX_CONCURRENT_LOOKUPS", "0");
        let err = ItineraryConfig::from_env().unwrap_err();
        assert!(err.contains("MAX_CONCURRENT_LOOKUPS"));
        clear_env();

        set_env("MAX_STOPS_PER_INTEREST", "zero");
        let err = ItineraryConfig::from_env().unwrap_err();
        assert!(err.contains("MAX_STOPS_PER_INTEREST"));
        clear_env();
    }
}
