//! Dose endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::{parse_dose_date, parse_id, ApiInput};
use crate::api::types::{ApiContext, MessageResponse};
use crate::db;
use crate::models::{Dose, DoseFields, NewDose};

#[derive(Debug, Deserialize)]
pub struct CreateDoseInput {
    pub vaccine_id: i64,
    pub type_dose: String,
    pub dose_date: String,
    pub dose_number: i32,
    pub application_type: String,
}

impl CreateDoseInput {
    fn validate(self) -> Result<NewDose, ApiError> {
        let fields = DoseFieldsInput {
            type_dose: self.type_dose,
            dose_date: self.dose_date,
            dose_number: self.dose_number,
            application_type: self.application_type,
        };
        Ok(NewDose {
            vaccine_id: self.vaccine_id,
            fields: fields.validate()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct DoseFieldsInput {
    pub type_dose: String,
    pub dose_date: String,
    pub dose_number: i32,
    pub application_type: String,
}

impl DoseFieldsInput {
    fn validate(self) -> Result<DoseFields, ApiError> {
        Ok(DoseFields {
            dose_date: parse_dose_date(&self.dose_date)?,
            type_dose: self.type_dose,
            dose_number: self.dose_number,
            application_type: self.application_type,
        })
    }
}

/// `POST /api/dose` — 404 when the vaccine does not exist.
pub async fn create(
    State(ctx): State<ApiContext>,
    ApiInput(input): ApiInput<CreateDoseInput>,
) -> Result<Json<Dose>, ApiError> {
    let new = input.validate()?;
    let dose = ctx
        .core
        .write_session(move |tx| db::insert_dose(tx, &new).map_err(ApiError::from))
        .await?;
    tracing::info!(dose_id = dose.id, vaccine_id = dose.vaccine_id, "Dose created");
    Ok(Json(dose))
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Dose>>, ApiError> {
    let doses = ctx
        .core
        .read_session(move |tx| db::get_all_doses(tx).map_err(ApiError::from))
        .await?;
    Ok(Json(doses))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<Dose>, ApiError> {
    let id = parse_id(&raw_id, "dose")?;
    let dose = ctx
        .core
        .read_session(move |tx| db::get_dose(tx, id).map_err(ApiError::from))
        .await?;
    Ok(Json(dose))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
    ApiInput(input): ApiInput<DoseFieldsInput>,
) -> Result<Json<Dose>, ApiError> {
    let id = parse_id(&raw_id, "dose")?;
    let fields = input.validate()?;
    let dose = ctx
        .core
        .write_session(move |tx| db::update_dose(tx, id, &fields).map_err(ApiError::from))
        .await?;
    tracing::info!(dose_id = id, "Dose updated");
    Ok(Json(dose))
}

pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id, "dose")?;
    ctx.core
        .write_session(move |tx| db::delete_dose(tx, id).map_err(ApiError::from))
        .await?;
    tracing::info!(dose_id = id, "Dose deleted");
    Ok(Json(MessageResponse {
        message: "Dose deleted successfully",
    }))
}
