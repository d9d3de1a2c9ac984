use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::*;

pub fn insert_trip_booking(conn: &Connection, booking: &TripBooking) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO trip_bookings (id, trip_type, current_location, destination, date, time, number_of_members, selected_car)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            booking.id.to_string(),
            booking.trip_type,
            booking.current_location,
            booking.destination,
            booking.date,
            booking.time,
            booking.number_of_members,
            booking.selected_car,
        ],
    )?;
    Ok(())
}

pub fn get_all_trip_bookings(conn: &Connection) -> Result<Vec<TripBooking>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, trip_type, current_location, destination, date, time, number_of_members, selected_car
         FROM trip_bookings",
    )?;

    let rows = stmt.query_map([], row_to_trip_booking)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

fn row_to_trip_booking(row: &Row<'_>) -> rusqlite::Result<TripBooking> {
    Ok(TripBooking {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        trip_type: row.get(1)?,
        current_location: row.get(2)?,
        destination: row.get(3)?,
        date: row.get(4)?,
        time: row.get(5)?,
        number_of_members: row.get(6)?,
        selected_car: row.get(7)?,
    })
}
