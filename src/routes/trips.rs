use crate::error::{AppError, Result};
use crate::models::trip::{FavoriteRequest, TripListQuery};
use crate::models::{CheckIn, TripRecord, TripStats};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// GET /trips?status=saved
pub async fn list_trips(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TripListQuery>,
) -> Result<Json<Vec<TripRecord>>> {
    let status = query.status_filter().map_err(AppError::InvalidRequest)?;
    Ok(Json(state.ledger.list(status).await?))
}

/// GET /trips/{id}
pub async fn get_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripRecord>> {
    Ok(Json(state.ledger.get(id).await?))
}

/// POST /trips/{id}/save
pub async fn save_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripRecord>> {
    Ok(Json(state.ledger.save(id).await?))
}

/// POST /trips/{id}/complete
pub async fn complete_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripRecord>> {
    Ok(Json(state.ledger.complete(id).await?))
}

/// PUT /trips/{id}/favorite
pub async fn set_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<FavoriteRequest>,
) -> Result<Json<TripRecord>> {
    Ok(Json(state.ledger.set_favorite(id, request.favorite).await?))
}

/// POST /trips/{id}/stops/{position}/check-in
pub async fn check_in(
    State(state): State<Arc<AppState>>,
    Path((id, position)): Path<(Uuid, u32)>,
    Json(check_in): Json<CheckIn>,
) -> Result<Json<TripRecord>> {
    Ok(Json(state.ledger.check_in(id, position, check_in).await?))
}

/// GET /trips/stats
pub async fn trip_stats(State(state): State<Arc<AppState>>) -> Result<Json<TripStats>> {
    Ok(Json(state.ledger.stats().await?))
}
