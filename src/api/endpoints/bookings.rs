//! Trip booking endpoint.
//!
//! Trip bookings are free-form transport requests. Every field is
//! optional on the wire and stored as given; review happens out of
//! band, so there is no read route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageResponse};
use crate::db::repository;
use crate::models::TripBooking;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripBookingPayload {
    #[serde(default)]
    pub trip_type: Option<String>,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub number_of_members: Option<String>,
    #[serde(default)]
    pub selected_car: Option<String>,
}

/// `POST /api/bookings` — save a trip booking.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<TripBookingPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let booking = TripBooking {
        id: Uuid::new_v4(),
        trip_type: payload.trip_type,
        current_location: payload.current_location,
        destination: payload.destination,
        date: payload.date,
        time: payload.time,
        number_of_members: payload.number_of_members,
        selected_car: payload.selected_car,
    };

    let conn = ctx.store.conn()?;
    repository::insert_trip_booking(&conn, &booking)?;
    tracing::info!(id = %booking.id, "Trip booking saved");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Booking saved successfully!")),
    ))
}
