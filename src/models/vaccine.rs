use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::iso_midnight;
use super::dose::Dose;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccine {
    pub id: i64,
    #[serde(rename = "pacient_id")]
    pub patient_id: i64,
    pub vaccine_name: String,
    #[serde(with = "iso_midnight")]
    pub dose_date: NaiveDate,
    /// Administered-dose count tracked at vaccine level.
    pub dose_number: i32,
    pub vaccine_type: String,
}

#[derive(Debug, Clone)]
pub struct NewVaccine {
    pub patient_id: i64,
    pub fields: VaccineFields,
}

/// Overwritable vaccine fields. The owning patient is fixed at creation.
#[derive(Debug, Clone)]
pub struct VaccineFields {
    pub vaccine_name: String,
    pub dose_date: NaiveDate,
    pub dose_number: i32,
    pub vaccine_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineDetail {
    #[serde(flatten)]
    pub vaccine: Vaccine,
    pub doses: Vec<Dose>,
}
