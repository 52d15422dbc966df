use std::sync::MutexGuard;

use crate::error::ApiError;
use crate::ledger::Ledger;
use crate::models::AppState;
use axum::Router;

pub mod appointment_routes;
pub mod health_routes;
pub mod slot_routes;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(slot_routes::router())
        .merge(appointment_routes::router())
        .merge(health_routes::router())
        .with_state(state)
}

/// Never hold the guard across an `.await`.
pub(crate) fn lock_ledger(state: &AppState) -> Result<MutexGuard<'_, Ledger>, ApiError> {
    state.ledger.lock().map_err(|_| ApiError::lock_poisoned())
}
