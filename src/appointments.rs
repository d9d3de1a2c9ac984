//! Appointment workflow — the one stateful corner of the service.
//!
//! An appointment enters through Book, guarded by the
//! one-active-appointment-per-doctor rule, and leaves through Remove, which
//! moves it into the append-only `removed_appointments` archive rather than
//! hard-deleting it. List is a read with an optional email filter.
//!
//! The doctor-uniqueness rule keys on the raw `selected_doctor` string and
//! nothing else: a doctor with an active appointment cannot be booked again
//! for any date or time until that appointment is removed.

use chrono::Utc;
use rusqlite::{Connection, TransactionBehavior};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::db::{repository, DatabaseError};
use crate::models::{Appointment, RemovedAppointment};

// ─── Types ────────────────────────────────────────────────────────────────────

/// Validated input for Book. Field names mirror the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub user_email: String,
    pub selected_doctor: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub meet_link: String,
}

// ─── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("This doctor is already booked for an appointment.")]
    DoctorAlreadyBooked { doctor: String },

    #[error("Appointment not found")]
    NotFound { id: String },

    #[error(transparent)]
    Store(#[from] DatabaseError),
}

// ─── Operations ───────────────────────────────────────────────────────────────

/// Book an appointment with a doctor.
///
/// The existence check up front produces the friendly conflict on the common
/// path. It is advisory only: two racing bookings can both pass it, and the
/// unique index on `appointments.selected_doctor` decides the winner at
/// insert time. The loser gets the same conflict error. Never retried.
pub fn book_appointment(
    conn: &Connection,
    request: BookingRequest,
) -> Result<Appointment, BookingError> {
    if repository::find_appointment_for_doctor(conn, &request.selected_doctor)?.is_some() {
        tracing::info!(doctor = %request.selected_doctor, "Booking rejected, doctor already held");
        return Err(BookingError::DoctorAlreadyBooked {
            doctor: request.selected_doctor,
        });
    }

    let appointment = Appointment {
        id: Uuid::new_v4(),
        user_email: request.user_email,
        selected_doctor: request.selected_doctor,
        appointment_date: request.appointment_date,
        appointment_time: request.appointment_time,
        meet_link: request.meet_link,
    };

    match repository::insert_appointment(conn, &appointment) {
        Ok(()) => {
            tracing::info!(
                appointment_id = %appointment.id,
                doctor = %appointment.selected_doctor,
                "Appointment booked"
            );
            Ok(appointment)
        }
        Err(e) if e.is_constraint_violation() => {
            tracing::info!(doctor = %appointment.selected_doctor, "Booking lost insert race");
            Err(BookingError::DoctorAlreadyBooked {
                doctor: appointment.selected_doctor,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// All active appointments, optionally narrowed to one user's email.
pub fn list_appointments(
    conn: &Connection,
    user_email: Option<&str>,
) -> Result<Vec<Appointment>, BookingError> {
    Ok(repository::list_appointments(conn, user_email)?)
}

/// Move an appointment into the archive and delete the original.
///
/// Lookup, archive insert, and delete run in one transaction. A failure or
/// disconnect before commit rolls the whole move back, so the archive and
/// the active set never disagree about a record.
///
/// The transaction starts immediate, taking the write lock before the
/// lookup: under a concurrent writer it waits out the busy timeout instead
/// of failing a read-to-write upgrade on a stale snapshot.
pub fn remove_appointment(conn: &mut Connection, id: &str) -> Result<(), BookingError> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(DatabaseError::from)?;

    let appointment = repository::find_appointment(&tx, id)?
        .ok_or_else(|| BookingError::NotFound { id: id.to_string() })?;

    let removed = RemovedAppointment::archive_of(&appointment, Utc::now());
    repository::insert_removed_appointment(&tx, &removed)?;
    repository::delete_appointment(&tx, id)?;

    tx.commit().map_err(DatabaseError::from)?;
    tracing::info!(appointment_id = %appointment.id, "Appointment archived");
    Ok(())
}
