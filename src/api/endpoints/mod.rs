//! API endpoint handlers.
//!
//! Each module covers one resource. Handlers stay thin: they parse
//! and validate the request, call into the workflow or repository
//! layer, and map failures through `ApiError`.

pub mod appointments;
pub mod bookings;
pub mod doctors;
pub mod health;
pub mod uploads;

use crate::api::error::ApiError;

/// Pull a required field out of a request, rejecting absent or blank
/// values with the field's wire name in the message.
pub(crate) fn require_field(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(format!("{name} is required"))),
    }
}
