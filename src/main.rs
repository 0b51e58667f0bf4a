use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripwise::config::Config;
use tripwise::constants::DEFAULT_LOOKUP_CACHE_MAX_ENTRIES;
use tripwise::services::itinerary_generator::ItineraryGenerator;
use tripwise::services::lookup_cache::CachedPlacesLookup;
use tripwise::services::places::PlacesLookup;
use tripwise::services::places_client::PlacesClient;
use tripwise::services::trip_ledger::{InMemoryTripLedger, TripLedger};
use tripwise::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripwise=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Tripwise API server");
    tracing::info!(
        region = %config.itinerary.home_region_name,
        lat = config.itinerary.home.lat,
        lng = config.itinerary.home.lng,
        "Home region: {}",
        config.itinerary.home_region_name
    );

    // Places lookup behind an in-memory cache
    let places_client = match config.places_base_url {
        Some(ref base_url) => PlacesClient::with_base_url(
            config.places_api_key.clone(),
            base_url.clone(),
            config.itinerary.search_radius_km,
        ),
        None => PlacesClient::new(
            config.places_api_key.clone(),
            config.itinerary.search_radius_km,
        ),
    };
    let lookup: Arc<dyn PlacesLookup> = Arc::new(CachedPlacesLookup::new(
        Arc::new(places_client),
        config.lookup_cache_ttl,
        DEFAULT_LOOKUP_CACHE_MAX_ENTRIES,
    ));

    let ledger: Arc<dyn TripLedger> = Arc::new(InMemoryTripLedger::new());
    let itinerary_generator = ItineraryGenerator::new(lookup, config.itinerary.clone());

    // Create application state
    let state = Arc::new(AppState {
        itinerary_generator,
        ledger,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", tripwise::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
