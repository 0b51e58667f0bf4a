use crate::error::{AppError, Result};
use crate::models::interest::find_interest;
use crate::models::{CandidatePlace, Coordinates};
use crate::services::places::PlacesLookup;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Nearby-search client for a Google-Places-style directory.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
    radius_meters: u32,
}

impl PlacesClient {
    pub fn new(api_key: String, radius_km: f64) -> Self {
        Self::with_base_url(api_key, PLACES_BASE_URL.to_string(), radius_km)
    }

    pub fn with_base_url(api_key: String, base_url: String, radius_km: f64) -> Self {
        PlacesClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            radius_meters: (radius_km * 1000.0).round() as u32,
        }
    }

    /// Query parameters for one interest. Catalog interests use their place
    /// type and keyword; anything else is searched by its label.
    fn search_params(&self, interest: &str, center: &Coordinates) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("location", center.to_query_value()),
            ("radius", self.radius_meters.to_string()),
        ];

        match find_interest(interest) {
            Some(profile) => {
                if let Some(place_type) = profile.place_type {
                    params.push(("type", place_type.to_string()));
                }
                params.push(("keyword", profile.keyword.to_string()));
            }
            None => params.push(("keyword", interest.trim().to_lowercase())),
        }

        params.push(("key", self.api_key.clone()));
        params
    }
}

#[async_trait]
impl PlacesLookup for PlacesClient {
    async fn search(&self, interest: &str, center: &Coordinates) -> Result<Vec<CandidatePlace>> {
        let url = format!("{}/nearbysearch/json", self.base_url);

        tracing::debug!(
            interest = %interest,
            radius_m = self.radius_meters,
            "Places API request: '{}' within {}m",
            interest, self.radius_meters
        );

        let response = self
            .client
            .get(&url)
            .query(&self.search_params(interest, center))
            .send()
            .await
            .map_err(|e| AppError::PlacesApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                interest = %interest,
                "Places API HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::PlacesApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: NearbySearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::PlacesApi(format!("Failed to parse response: {}", e)))?;

        let places = body.into_candidates()?;
        tracing::debug!(
            interest = %interest,
            count = places.len(),
            "Places API returned {} candidates for '{}'",
            places.len(), interest
        );
        Ok(places)
    }
}

// Places API response types

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    place_id: String,
    name: String,
    #[serde(default)]
    vicinity: Option<String>,
    geometry: PlaceGeometry,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    user_ratings_total: Option<u32>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceGeometry {
    location: PlaceLocation,
}

#[derive(Debug, Deserialize)]
struct PlaceLocation {
    lat: f64,
    lng: f64,
}

impl NearbySearchResponse {
    /// Provider-level status check, then conversion to our candidate type.
    /// `ZERO_RESULTS` is a successful empty search, not an error.
    fn into_candidates(self) -> Result<Vec<CandidatePlace>> {
        match self.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            other => {
                let detail = self.error_message.unwrap_or_default();
                return Err(AppError::PlacesApi(format!(
                    "Provider status {}: {}",
                    other, detail
                )));
            }
        }

        Ok(self
            .results
            .into_iter()
            .filter_map(|result| {
                let coordinates =
                    match Coordinates::new(result.geometry.location.lat, result.geometry.location.lng) {
                        Ok(coordinates) => coordinates,
                        Err(e) => {
                            tracing::warn!("Dropping place '{}': {}", result.name, e);
                            return None;
                        }
                    };

                // Ratings outside the provider's 0-5 scale can't be ranked
                let rating = match result.rating {
                    Some(rating) if !(0.0..=5.0).contains(&rating) => {
                        tracing::warn!(
                            "Ignoring out-of-range rating {} for '{}'",
                            rating,
                            result.name
                        );
                        None
                    }
                    rating => rating,
                };

                Some(CandidatePlace {
                    id: result.place_id,
                    name: result.name,
                    vicinity: result.vicinity.unwrap_or_default(),
                    coordinates,
                    rating,
                    review_count: result.user_ratings_total,
                    categories: result.types,
                })
            })
            .collect())
    }
}
