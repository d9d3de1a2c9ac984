use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::*;

pub fn insert_doctor(conn: &Connection, doctor: &Doctor) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (id, full_name, license_number, experience, specialization, document)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            doctor.id.to_string(),
            doctor.full_name,
            doctor.license_number,
            doctor.experience,
            doctor.specialization,
            doctor.document,
        ],
    )?;
    Ok(())
}

pub fn get_all_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, full_name, license_number, experience, specialization, document
         FROM doctors",
    )?;

    let rows = stmt.query_map([], row_to_doctor)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

fn row_to_doctor(row: &Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        full_name: row.get(1)?,
        license_number: row.get(2)?,
        experience: row.get(3)?,
        specialization: row.get(4)?,
        document: row.get(5)?,
    })
}
