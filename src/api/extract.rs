//! Request input extraction and validation.
//!
//! Create and update endpoints take their scalar fields either from the
//! query string or, when the request is `application/json`, from the body.
//! Anything that fails to deserialize is rejected with 400 before a
//! database connection is opened.

use axum::async_trait;
use axum::extract::{FromRequest, Query, Request};
use axum::http::header;
use axum::Json;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::models::dates::parse_calendar_date;

/// Scalar request fields from the query string or a JSON body.
#[derive(Debug)]
pub struct ApiInput<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().starts_with("application/json"))
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for ApiInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            Ok(Self(value))
        } else {
            let Query(value) = Query::<T>::try_from_uri(req.uri())
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// Parse a numeric record id from a path segment.
pub fn parse_id(raw: &str, entity: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|e| ApiError::BadRequest(format!("Invalid {entity} id '{raw}': {e}")))
}

/// Validate a `dose_date` field (`YYYY-MM-DD`).
pub fn parse_dose_date(raw: &str) -> Result<NaiveDate, ApiError> {
    parse_calendar_date(raw).map_err(|e| {
        ApiError::BadRequest(format!("Invalid dose_date '{raw}': expected YYYY-MM-DD ({e})"))
    })
}
