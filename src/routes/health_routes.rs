use axum::{Json, Router, extract::State, routing::get};

use crate::error::ApiError;
use crate::models::{AppState, HealthResponse};
use crate::routes::lock_ledger;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let ledger = lock_ledger(&state)?;

    Ok(Json(HealthResponse {
        status: "ok",
        live_appointments: ledger.appointments().len(),
        cancellations: ledger.history().len(),
    }))
}
