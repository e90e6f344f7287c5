//! Patient endpoints.
//!
//! - `POST   /api/pacient`      — create
//! - `GET    /api/pacient`      — list
//! - `GET    /api/pacient/:id`  — detail with vaccines and doses
//! - `PUT    /api/pacient/:id`  — overwrite name fields
//! - `DELETE /api/pacient/:id`  — delete, cascading to vaccines and doses

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::{parse_id, ApiInput};
use crate::api::types::{ApiContext, MessageResponse};
use crate::db;
use crate::models::{Patient, PatientDetail, PatientFields};

#[derive(Debug, Deserialize)]
pub struct PatientInput {
    pub name: String,
    pub last_name: String,
}

impl From<PatientInput> for PatientFields {
    fn from(input: PatientInput) -> Self {
        PatientFields {
            name: input.name,
            last_name: input.last_name,
        }
    }
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ApiInput(input): ApiInput<PatientInput>,
) -> Result<Json<Patient>, ApiError> {
    let fields = PatientFields::from(input);
    let patient = ctx
        .core
        .write_session(move |tx| db::insert_patient(tx, &fields).map_err(ApiError::from))
        .await?;
    tracing::info!(pacient_id = patient.id, "Pacient created");
    Ok(Json(patient))
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = ctx
        .core
        .read_session(move |tx| db::get_all_patients(tx).map_err(ApiError::from))
        .await?;
    Ok(Json(patients))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<PatientDetail>, ApiError> {
    let id = parse_id(&raw_id, "pacient")?;
    let detail = ctx
        .core
        .read_session(move |tx| db::get_patient_detail(tx, id).map_err(ApiError::from))
        .await?;
    Ok(Json(detail))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
    ApiInput(input): ApiInput<PatientInput>,
) -> Result<Json<Patient>, ApiError> {
    let id = parse_id(&raw_id, "pacient")?;
    let fields = PatientFields::from(input);
    let patient = ctx
        .core
        .write_session(move |tx| db::update_patient(tx, id, &fields).map_err(ApiError::from))
        .await?;
    tracing::info!(pacient_id = id, "Pacient updated");
    Ok(Json(patient))
}

pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id, "pacient")?;
    let removed = ctx
        .core
        .write_session(move |tx| db::delete_patient(tx, id).map_err(ApiError::from))
        .await?;
    tracing::info!(
        pacient_id = id,
        vaccines = removed.vaccines,
        doses = removed.doses,
        "Pacient deleted"
    );
    Ok(Json(MessageResponse {
        message: "Pacient deleted successfully",
    }))
}
