use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::*;

pub fn insert_appointment(conn: &Connection, appointment: &Appointment) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO appointments (id, user_email, selected_doctor, appointment_date, appointment_time, meet_link)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            appointment.id.to_string(),
            appointment.user_email,
            appointment.selected_doctor,
            appointment.appointment_date,
            appointment.appointment_time,
            appointment.meet_link,
        ],
    )?;
    Ok(())
}

pub fn find_appointment(conn: &Connection, id: &str) -> Result<Option<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_email, selected_doctor, appointment_date, appointment_time, meet_link
         FROM appointments WHERE id = ?1 LIMIT 1",
    )?;

    match stmt.query_row(params![id], row_to_appointment) {
        Ok(appointment) => Ok(Some(appointment)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// The active appointment holding a doctor, if any. Doctors are matched by
/// the exact `selected_doctor` string.
pub fn find_appointment_for_doctor(
    conn: &Connection,
    doctor: &str,
) -> Result<Option<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_email, selected_doctor, appointment_date, appointment_time, meet_link
         FROM appointments WHERE selected_doctor = ?1 LIMIT 1",
    )?;

    match stmt.query_row(params![doctor], row_to_appointment) {
        Ok(appointment) => Ok(Some(appointment)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All active appointments, optionally narrowed to one user's email.
/// Store-native order; no sort is promised.
pub fn list_appointments(
    conn: &Connection,
    user_email: Option<&str>,
) -> Result<Vec<Appointment>, DatabaseError> {
    match user_email {
        Some(email) => {
            let mut stmt = conn.prepare(
                "SELECT id, user_email, selected_doctor, appointment_date, appointment_time, meet_link
                 FROM appointments WHERE user_email = ?1",
            )?;
            let rows = stmt.query_map(params![email], row_to_appointment)?;
            rows.map(|r| r.map_err(DatabaseError::from)).collect()
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, user_email, selected_doctor, appointment_date, appointment_time, meet_link
                 FROM appointments",
            )?;
            let rows = stmt.query_map([], row_to_appointment)?;
            rows.map(|r| r.map_err(DatabaseError::from)).collect()
        }
    }
}

pub fn delete_appointment(conn: &Connection, id: &str) -> Result<(), DatabaseError> {
    let changed = conn.execute("DELETE FROM appointments WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Appointment".to_string(),
            id: id.to_string(),
        });
    }
    Ok(())
}

pub fn insert_removed_appointment(
    conn: &Connection,
    removed: &RemovedAppointment,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO removed_appointments (id, user_email, selected_doctor, appointment_date, appointment_time, meet_link, deleted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            removed.id.to_string(),
            removed.user_email,
            removed.selected_doctor,
            removed.appointment_date,
            removed.appointment_time,
            removed.meet_link,
            removed.deleted_at,
        ],
    )?;
    Ok(())
}

pub fn list_removed_appointments(conn: &Connection) -> Result<Vec<RemovedAppointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_email, selected_doctor, appointment_date, appointment_time, meet_link, deleted_at
         FROM removed_appointments",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(RemovedAppointment {
            id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
            user_email: row.get(1)?,
            selected_doctor: row.get(2)?,
            appointment_date: row.get(3)?,
            appointment_time: row.get(4)?,
            meet_link: row.get(5)?,
            deleted_at: row.get(6)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

fn row_to_appointment(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        user_email: row.get(1)?,
        selected_doctor: row.get(2)?,
        appointment_date: row.get(3)?,
        appointment_time: row.get(4)?,
        meet_link: row.get(5)?,
    })
}
