// src/routes/slot_routes.rs

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::{
    error::ApiError,
    models::{AppState, SlotsQuery, SlotsResponse},
    routes::lock_ledger,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/slots", get(get_slots))
}

pub async fn get_slots(
    State(state): State<AppState>,
    Query(q): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, ApiError> {
    let available_slots = lock_ledger(&state)?.get_slots(&q.date);

    Ok(Json(SlotsResponse {
        date: q.date,
        available_slots,
    }))
}
