use serde::{Deserialize, Serialize};

use super::vaccine::VaccineDetail;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub last_name: String,
}

/// Field values for creating or overwriting a patient.
#[derive(Debug, Clone)]
pub struct PatientFields {
    pub name: String,
    pub last_name: String,
}

/// A patient with every vaccine and every dose it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientDetail {
    #[serde(flatten)]
    pub patient: Patient,
    pub vaccines: Vec<VaccineDetail>,
}
