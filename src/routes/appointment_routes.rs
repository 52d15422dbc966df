// src/routes/appointment_routes.rs

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::{
    error::ApiError,
    models::{
        AppState, Appointment, AppointmentIdResponse, BookingRequest, DashboardQuery,
        DashboardResponse, RescheduleRequest, RescheduleResponse,
    },
    routes::lock_ledger,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/book", post(book_appointment))
        .route("/doctor-dashboard", get(doctor_dashboard))
        .route("/appointment/{appointment_id}", get(get_appointment))
        .route("/cancel/{appointment_id}", delete(cancel_appointment))
        .route("/reschedule/{appointment_id}", put(reschedule_appointment))
}

/* ============================================================
   POST /book
   ============================================================ */

pub async fn book_appointment(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<AppointmentIdResponse>, ApiError> {
    let appointment_id = lock_ledger(&state)?.book(
        &req.date,
        &req.time,
        &req.patient_name,
        &req.doctor_name,
    )?;

    Ok(Json(AppointmentIdResponse {
        message: "Appointment booked successfully".to_string(),
        appointment_id,
    }))
}

/* ============================================================
   GET /doctor-dashboard
   ============================================================ */

pub async fn doctor_dashboard(
    State(state): State<AppState>,
    Query(q): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    // an empty ?doctor_name= means "everyone"
    let doctor_name = q.doctor_name.filter(|d| !d.is_empty());
    let appointments = lock_ledger(&state)?.list_appointments(doctor_name.as_deref());

    Ok(Json(DashboardResponse {
        doctor_name,
        total: appointments.len(),
        appointments,
    }))
}

/* ============================================================
   GET /appointment/{id}
   ============================================================ */

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<u64>,
) -> Result<Json<Appointment>, ApiError> {
    let ledger = lock_ledger(&state)?;
    let appt = ledger.get_appointment(appointment_id)?.clone();
    Ok(Json(appt))
}

/* ============================================================
   DELETE /cancel/{id}
   ============================================================ */

pub async fn cancel_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<u64>,
) -> Result<Json<AppointmentIdResponse>, ApiError> {
    let appointment_id = lock_ledger(&state)?.cancel(appointment_id)?;

    Ok(Json(AppointmentIdResponse {
        message: "Appointment cancelled successfully".to_string(),
        appointment_id,
    }))
}

/* ============================================================
   PUT /reschedule/{id}
   ============================================================ */

pub async fn reschedule_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<u64>,
    Json(req): Json<RescheduleRequest>,
) -> Result<Json<RescheduleResponse>, ApiError> {
    let moved = lock_ledger(&state)?
        .reschedule(appointment_id, &req.new_date, &req.new_time)
        .map_err(ApiError::from_reschedule)?;

    Ok(Json(moved.into()))
}
