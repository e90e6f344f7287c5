//! Vaccine endpoints.
//!
//! - `POST   /api/vaccine`      — create under an existing patient
//! - `GET    /api/vaccine`      — flat list
//! - `GET    /api/vaccine/:id`  — detail with doses
//! - `PUT    /api/vaccine/:id`  — overwrite all fields except the owner
//! - `DELETE /api/vaccine/:id`  — delete, cascading to doses

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::{parse_dose_date, parse_id, ApiInput};
use crate::api::types::{ApiContext, MessageResponse};
use crate::db;
use crate::models::{NewVaccine, Vaccine, VaccineDetail, VaccineFields};

// No `#[serde(flatten)]` here: query-string values arrive as strings and
// flattened numeric fields would fail to deserialize.
#[derive(Debug, Deserialize)]
pub struct CreateVaccineInput {
    pub pacient_id: i64,
    pub vaccine_name: String,
    pub dose_date: String,
    pub dose_number: i32,
    pub vaccine_type: String,
}

impl CreateVaccineInput {
    fn validate(self) -> Result<NewVaccine, ApiError> {
        let fields = VaccineFieldsInput {
            vaccine_name: self.vaccine_name,
            dose_date: self.dose_date,
            dose_number: self.dose_number,
            vaccine_type: self.vaccine_type,
        };
        Ok(NewVaccine {
            patient_id: self.pacient_id,
            fields: fields.validate()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct VaccineFieldsInput {
    pub vaccine_name: String,
    pub dose_date: String,
    pub dose_number: i32,
    pub vaccine_type: String,
}

impl VaccineFieldsInput {
    fn validate(self) -> Result<VaccineFields, ApiError> {
        Ok(VaccineFields {
            dose_date: parse_dose_date(&self.dose_date)?,
            vaccine_name: self.vaccine_name,
            dose_number: self.dose_number,
            vaccine_type: self.vaccine_type,
        })
    }
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ApiInput(input): ApiInput<CreateVaccineInput>,
) -> Result<Json<Vaccine>, ApiError> {
    let new = input.validate()?;
    let vaccine = ctx
        .core
        .write_session(move |tx| db::insert_vaccine(tx, &new).map_err(ApiError::from))
        .await?;
    tracing::info!(vaccine_id = vaccine.id, pacient_id = vaccine.patient_id, "Vaccine created");
    Ok(Json(vaccine))
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Vaccine>>, ApiError> {
    let vaccines = ctx
        .core
        .read_session(move |tx| db::get_all_vaccines(tx).map_err(ApiError::from))
        .await?;
    Ok(Json(vaccines))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<VaccineDetail>, ApiError> {
    let id = parse_id(&raw_id, "vaccine")?;
    let detail = ctx
        .core
        .read_session(move |tx| db::get_vaccine_detail(tx, id).map_err(ApiError::from))
        .await?;
    Ok(Json(detail))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
    ApiInput(input): ApiInput<VaccineFieldsInput>,
) -> Result<Json<Vaccine>, ApiError> {
    let id = parse_id(&raw_id, "vaccine")?;
    let fields = input.validate()?;
    let vaccine = ctx
        .core
        .write_session(move |tx| db::update_vaccine(tx, id, &fields).map_err(ApiError::from))
        .await?;
    tracing::info!(vaccine_id = id, "Vaccine updated");
    Ok(Json(vaccine))
}

pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id, "vaccine")?;
    let doses = ctx
        .core
        .write_session(move |tx| db::delete_vaccine(tx, id).map_err(ApiError::from))
        .await?;
    tracing::info!(vaccine_id = id, doses, "Vaccine deleted");
    Ok(Json(MessageResponse {
        message: "Vaccine deleted successfully",
    }))
}
