use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let config = state.itinerary_generator.config();
    let mut status = json!({
        "status": "ok",
        "checks": {
            "home_region": config.home_region_name,
            "search_radius_km": config.search_radius_km,
        }
    });

    match state.ledger.stats().await {
        Ok(stats) => {
            status["checks"]["ledger"] = json!("ok");
            status["checks"]["trip_count"] = json!(stats.total_trips);
        }
        Err(e) => {
            status["checks"]["ledger"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    Json(status)
}
