use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An active appointment. At most one exists per `selected_doctor` value;
/// the store enforces that with a unique index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub user_email: String,
    pub selected_doctor: String,
    /// Opaque scheduling strings; never parsed or ordered on.
    pub appointment_date: String,
    pub appointment_time: String,
    pub meet_link: String,
}

/// Archive copy of a removed appointment: same id and fields as the record
/// it replaces, plus the removal instant. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedAppointment {
    pub id: Uuid,
    pub user_email: String,
    pub selected_doctor: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub meet_link: String,
    pub deleted_at: DateTime<Utc>,
}

impl RemovedAppointment {
    pub fn archive_of(appointment: &Appointment, deleted_at: DateTime<Utc>) -> Self {
        Self {
            id: appointment.id,
            user_email: appointment.user_email.clone(),
            selected_doctor: appointment.selected_doctor.clone(),
            appointment_date: appointment.appointment_date.clone(),
            appointment_time: appointment.appointment_time.clone(),
            meet_link: appointment.meet_link.clone(),
            deleted_at,
        }
    }
}
