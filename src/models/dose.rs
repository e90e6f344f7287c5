use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::iso_midnight;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dose {
    pub id: i64,
    pub vaccine_id: i64,
    pub type_dose: String,
    #[serde(with = "iso_midnight")]
    pub dose_date: NaiveDate,
    /// Ordinal of this dose event.
    pub dose_number: i32,
    /// Route of administration, e.g. intramuscular.
    pub application_type: String,
}

#[derive(Debug, Clone)]
pub struct NewDose {
    pub vaccine_id: i64,
    pub fields: DoseFields,
}

/// Overwritable dose fields. The owning vaccine is fixed at creation.
#[derive(Debug, Clone)]
pub struct DoseFields {
    pub type_dose: String,
    pub dose_date: NaiveDate,
    pub dose_number: i32,
    pub application_type: String,
}
