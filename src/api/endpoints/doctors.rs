//! Doctor registration and listing endpoints.
//!
//! Registration arrives as a multipart form because the credential
//! document rides along with the text fields.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::api::endpoints::require_field;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::Doctor;
use crate::uploads;

/// `GET /doctors` — every registered doctor.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Doctor>>, ApiError> {
    let conn = ctx.store.conn()?;
    let doctors = repository::get_all_doctors(&conn)?;

    Ok(Json(doctors))
}

/// `POST /doctors` — register a doctor from a multipart form.
///
/// Text parts: `fullName`, `licenseNumber`, `experience`,
/// `specialization`. File part: `document`. The file is staged into the
/// uploads directory and the record keeps its serving path.
pub async fn create(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Doctor>), ApiError> {
    let mut full_name = None;
    let mut license_number = None;
    let mut experience = None;
    let mut specialization = None;
    let mut document: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "fullName" => full_name = Some(field.text().await?),
            "licenseNumber" => license_number = Some(field.text().await?),
            "experience" => experience = Some(field.text().await?),
            "specialization" => specialization = Some(field.text().await?),
            "document" => {
                let filename = field.file_name().unwrap_or("document").to_string();
                let bytes = field.bytes().await?;
                document = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    // Validate all text parts before touching the filesystem, so a bad
    // form never leaves an orphaned file behind.
    let full_name = require_field(full_name, "fullName")?;
    let license_number = require_field(license_number, "licenseNumber")?;
    let specialization = require_field(specialization, "specialization")?;
    let experience: u32 = require_field(experience, "experience")?
        .trim()
        .parse()
        .map_err(|_| ApiError::Validation("experience must be a whole number of years".into()))?;

    let (filename, bytes) = document
        .ok_or_else(|| ApiError::Validation("document file is required".to_string()))?;

    let stored = uploads::stage_document(&ctx.uploads_dir, &filename, &bytes)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to store document: {e}")))?;

    let doctor = Doctor {
        id: Uuid::new_v4(),
        full_name,
        license_number,
        experience,
        specialization,
        document: format!("uploads/{stored}"),
    };

    let conn = ctx.store.conn()?;
    repository::insert_doctor(&conn, &doctor)?;
    tracing::info!(id = %doctor.id, "Doctor registered");

    Ok((StatusCode::CREATED, Json(doctor)))
}
