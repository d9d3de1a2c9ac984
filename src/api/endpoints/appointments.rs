//! Appointment endpoints.
//!
//! - `POST /appointments` — book a doctor
//! - `GET /appointments` — list active appointments, optionally one user's
//! - `DELETE /appointments/:id` — archive an appointment, then delete it

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::endpoints::require_field;
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageResponse};
use crate::appointments::{self, BookingRequest};
use crate::models::Appointment;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub selected_doctor: Option<String>,
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub appointment_time: Option<String>,
    #[serde(default)]
    pub meet_link: Option<String>,
}

/// `POST /appointments` — book an appointment with a doctor.
pub async fn book(
    State(ctx): State<ApiContext>,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let request = BookingRequest {
        user_email: require_field(payload.user_email, "userEmail")?,
        selected_doctor: require_field(payload.selected_doctor, "selectedDoctor")?,
        appointment_date: require_field(payload.appointment_date, "appointmentDate")?,
        appointment_time: require_field(payload.appointment_time, "appointmentTime")?,
        meet_link: require_field(payload.meet_link, "meetLink")?,
    };

    let conn = ctx.store.conn()?;
    let appointment = appointments::book_appointment(&conn, request)?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub user_email: Option<String>,
}

/// `GET /appointments` — list appointments, narrowed by `?userEmail=`.
///
/// A blank filter value means no filter. The legacy client sends
/// `?userEmail=` with an empty value when no user is selected and expects
/// the full list back.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let filter = query.user_email.as_deref().filter(|email| !email.is_empty());

    let conn = ctx.store.conn()?;
    let appointments = appointments::list_appointments(&conn, filter)?;

    Ok(Json(appointments))
}

/// `DELETE /appointments/:id` — move the appointment into the archive.
///
/// Unknown ids (including strings that never were ids) report not found;
/// the route does not distinguish malformed from missing.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = ctx.store.conn()?;
    appointments::remove_appointment(&mut conn, &id)?;

    Ok(Json(MessageResponse::new(
        "Appointment removed and stored for verification.",
    )))
}
