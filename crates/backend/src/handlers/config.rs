use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::config::{CacheConfigDto, ConfigUpdateRequest};

use crate::state::AppState;

/// GET /api/config
pub async fn get_config(State(state): State<AppState>) -> Json<CacheConfigDto> {
    Json(state.store.config())
}

/// POST /api/config
///
/// Partial update; fields absent from the request keep their value. Returns
/// the resulting configuration.
pub async fn update_config(
    State(state): State<AppState>,
    Json(update): Json<ConfigUpdateRequest>,
) -> Result<Json<CacheConfigDto>, StatusCode> {
    if let Err(reason) = update.validate() {
        tracing::warn!(%reason, "rejected config update");
        return Err(StatusCode::BAD_REQUEST);
    }
    if update.is_empty() {
        return Ok(Json(state.store.config()));
    }

    tracing::info!(?update, "received config update");
    let applied = state.store.apply_config_update(&update);
    Ok(Json(applied))
}
