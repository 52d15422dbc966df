use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::models::{Appointment, AppointmentStatus, CancellationRecord, Rescheduled};
use crate::notify::Notifier;
use crate::slots::SlotCalendar;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("appointment {0} not found")]
    NotFound(u64),
    #[error("slot {date} {time} is not available")]
    SlotUnavailable { date: String, time: String },
    #[error("appointment {id} is {status}, expected Booked")]
    InvalidState { id: u64, status: AppointmentStatus },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Live appointments, cancellation history and free slots.
///
/// Every operation runs to completion on `&mut self`; callers that share a
/// ledger between requests wrap it in a lock (see `models::SharedLedger`).
pub struct Ledger {
    appointments: Vec<Appointment>,
    history: Vec<CancellationRecord>,
    calendar: SlotCalendar,
    next_id: u64,
    notifier: Arc<dyn Notifier>,
}

impl Ledger {
    pub fn new(calendar: SlotCalendar, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            appointments: Vec::new(),
            history: Vec::new(),
            calendar,
            next_id: 1,
            notifier,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Audit trail of cancellations; no operation reads it back.
    pub fn history(&self) -> &[CancellationRecord] {
        &self.history
    }

    pub fn get_slots(&self, date: &str) -> Vec<String> {
        self.calendar.available(date)
    }

    pub fn book(
        &mut self,
        date: &str,
        time: &str,
        patient_name: &str,
        doctor_name: &str,
    ) -> Result<u64> {
        if !self.calendar.take(date, time) {
            return Err(LedgerError::SlotUnavailable {
                date: date.to_string(),
                time: time.to_string(),
            });
        }

        // ids come from a counter so a cancelled id is never handed out again
        let id = self.next_id;
        self.next_id += 1;

        self.appointments.push(Appointment {
            id,
            patient_name: patient_name.to_string(),
            doctor_name: doctor_name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            status: AppointmentStatus::Booked,
            created_at: Utc::now(),
        });

        tracing::info!(appointment_id = id, date, time, doctor = doctor_name, "appointment booked");
        self.notifier.notify(&format!(
            "Booking confirmation sent to {patient_name} for {date} at {time}"
        ));

        Ok(id)
    }

    pub fn cancel(&mut self, appointment_id: u64) -> Result<u64> {
        let idx = self
            .position(appointment_id)
            .ok_or(LedgerError::NotFound(appointment_id))?;
        let appt = self.appointments.remove(idx);

        self.history.push(CancellationRecord {
            id: appt.id,
            patient_name: appt.patient_name.clone(),
            doctor_name: appt.doctor_name.clone(),
            date: appt.date.clone(),
            time: appt.time.clone(),
            status: AppointmentStatus::Cancelled,
            cancelled_at: Utc::now(),
        });
        self.calendar.release(&appt.date, &appt.time);

        tracing::info!(
            appointment_id = appt.id,
            date = %appt.date,
            time = %appt.time,
            "appointment cancelled"
        );
        self.notifier.notify(&format!(
            "Doctor {} notified of cancellation on {} at {}",
            appt.doctor_name, appt.date, appt.time
        ));
        self.notifier.notify(&format!(
            "Cancellation confirmation sent to {}",
            appt.patient_name
        ));

        Ok(appt.id)
    }

    /// Move a booked appointment to another free slot.
    ///
    /// All checks happen before any mutation; on error nothing changes.
    pub fn reschedule(
        &mut self,
        appointment_id: u64,
        new_date: &str,
        new_time: &str,
    ) -> Result<Rescheduled> {
        let idx = self
            .position(appointment_id)
            .ok_or(LedgerError::NotFound(appointment_id))?;

        let status = self.appointments[idx].status;
        if status != AppointmentStatus::Booked {
            return Err(LedgerError::InvalidState {
                id: appointment_id,
                status,
            });
        }

        self.calendar.seed(new_date);
        if !self.calendar.is_free(new_date, new_time) {
            return Err(LedgerError::SlotUnavailable {
                date: new_date.to_string(),
                time: new_time.to_string(),
            });
        }

        let appt = &mut self.appointments[idx];
        let old_date = std::mem::replace(&mut appt.date, new_date.to_string());
        let old_time = std::mem::replace(&mut appt.time, new_time.to_string());
        let patient = appt.patient_name.clone();
        let doctor = appt.doctor_name.clone();

        self.calendar.release(&old_date, &old_time);
        self.calendar.take(new_date, new_time);

        tracing::info!(
            appointment_id,
            old_date = %old_date,
            old_time = %old_time,
            new_date,
            new_time,
            "appointment rescheduled"
        );
        self.notifier.notify(&format!(
            "Rescheduling confirmation sent to {patient}: {old_date} {old_time} -> {new_date} {new_time}"
        ));
        self.notifier.notify(&format!(
            "Doctor {doctor} notified of rescheduling: {old_date} {old_time} -> {new_date} {new_time}"
        ));

        Ok(Rescheduled {
            appointment_id,
            old_date,
            old_time,
            new_date: new_date.to_string(),
            new_time: new_time.to_string(),
        })
    }

    pub fn get_appointment(&self, appointment_id: u64) -> Result<&Appointment> {
        self.appointments
            .iter()
            .find(|a| a.id == appointment_id)
            .ok_or(LedgerError::NotFound(appointment_id))
    }

    /// Live appointments in booking order, optionally only one doctor's.
    pub fn list_appointments(&self, doctor_name: Option<&str>) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| doctor_name.is_none_or(|d| a.doctor_name == d))
            .cloned()
            .collect()
    }

    fn position(&self, appointment_id: u64) -> Option<usize> {
        self.appointments.iter().position(|a| a.id == appointment_id)
    }
}
