use crate::constants::LOOKUP_CACHE_COORD_PRECISION;
use crate::error::Result;
use crate::models::{CandidatePlace, Coordinates};
use crate::services::places::PlacesLookup;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Places lookup decorated with an in-memory moka cache.
/// Only successful searches are cached; a failure is returned as-is and the
/// next request goes back to the provider.
pub struct CachedPlacesLookup {
    inner: Arc<dyn PlacesLookup>,
    results: Cache<String, Arc<Vec<CandidatePlace>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedPlacesLookup {
    pub fn new(inner: Arc<dyn PlacesLookup>, ttl_seconds: u64, max_capacity: u64) -> Self {
        let results = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        CachedPlacesLookup {
            inner,
            results,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Key on the lowercased interest and the center rounded to ~100m.
    pub fn cache_key(interest: &str, center: &Coordinates) -> String {
        let rounded = center.round(LOOKUP_CACHE_COORD_PRECISION);
        format!(
            "places:{}:{}:{}",
            interest.trim().to_lowercase(),
            rounded.lat,
            rounded.lng
        )
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl PlacesLookup for CachedPlacesLookup {
    async fn search(&self, interest: &str, center: &Coordinates) -> Result<Vec<CandidatePlace>> {
        let key = Self::cache_key(interest, center);

        if let Some(cached) = self.results.get(&key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Lookup cache hit: {}", key);
            return Ok((*cached).clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Lookup cache miss: {}", key);

        let places = self.inner.search(interest, center).await?;
        self.results.insert(key, Arc::new(places.clone())).await;
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::AtomicUsize;

    struct CountingLookup {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl PlacesLookup for CountingLookup {
        async fn search(
            &self,
            interest: &str,
            center: &Coordinates,
        ) -> Result<Vec<CandidatePlace>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::PlacesApi("unavailable".to_string()));
            }
            Ok(vec![CandidatePlace::new(
                format!("{}-1", interest),
                interest,
                *center,
            )])
        }
    }

    fn center() -> Coordinates {
        Coordinates::new(32.7157, -117.1611).unwrap()
    }

    #[test]
    fn test_cache_key_normalizes_interest_and_center() {
        let a = CachedPlacesLookup::cache_key("Beaches", &center());
        let b = CachedPlacesLookup::cache_key(
            " beaches ",
            &Coordinates::new(32.71571, -117.16112).unwrap(),
        );
        assert_eq!(a, b);
        assert_ne!(a, CachedPlacesLookup::cache_key("Museums", &center()));
    }

    #[tokio::test]
    async fn test_second_search_is_served_from_cache() {
        let inner = Arc::new(CountingLookup {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let cached = CachedPlacesLookup::new(inner.clone(), 60, 10);

        let first = cached.search("Beaches", &center()).await.unwrap();
        let second = cached.search("Beaches", &center()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.hits(), 1);
        assert_eq!(cached.misses(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let inner = Arc::new(CountingLookup {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let cached = CachedPlacesLookup::new(inner.clone(), 60, 10);

        assert!(cached.search("Food", &center()).await.is_err());
        assert!(cached.search("Food", &center()).await.is_err());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }
}
