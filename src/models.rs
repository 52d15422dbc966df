use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

pub type SharedLedger = Arc<Mutex<Ledger>>;

#[derive(Clone)]
pub struct AppState {
    pub ledger: SharedLedger,
}

/* -------------------------
   Domain
--------------------------*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Booked,
    Cancelled,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Booked => f.write_str("Booked"),
            AppointmentStatus::Cancelled => f.write_str("Cancelled"),
        }
    }
}

/// Serialized as-is for `GET /appointment/{id}` and the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appointment {
    pub id: u64,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancellationRecord {
    pub id: u64,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub cancelled_at: DateTime<Utc>,
}

/// Old and new slot of a successful reschedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rescheduled {
    pub appointment_id: u64,
    pub old_date: String,
    pub old_time: String,
    pub new_date: String,
    pub new_time: String,
}

/* -------------------------
   API DTOs
--------------------------*/

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub available_slots: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub date: String,
    pub time: String,
    pub patient_name: String,
    pub doctor_name: String,
}

#[derive(Debug, Deserialize)]
pub struct RescheduleRequest {
    pub new_date: String,
    pub new_time: String,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub doctor_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AppointmentIdResponse {
    pub message: String,
    pub appointment_id: u64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    pub appointments: Vec<Appointment>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct RescheduleResponse {
    pub message: String,
    pub appointment_id: u64,
    pub old_date: String,
    pub old_time: String,
    pub new_date: String,
    pub new_time: String,
}

impl From<Rescheduled> for RescheduleResponse {
    fn from(r: Rescheduled) -> Self {
        Self {
            message: "Appointment rescheduled successfully".to_string(),
            appointment_id: r.appointment_id,
            old_date: r.old_date,
            old_time: r.old_time,
            new_date: r.new_date,
            new_time: r.new_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub live_appointments: usize,
    pub cancellations: usize,
}
