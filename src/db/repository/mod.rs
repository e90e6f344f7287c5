//! Repository layer — entity-scoped database operations.
//!
//! Functions take a plain `&Connection` so callers can run them on a bare
//! connection or inside a `Transaction` (which derefs to one).

mod dose;
mod patient;
mod vaccine;

use rusqlite::Row;

use crate::models::{Dose, Vaccine};

pub use dose::*;
pub use patient::*;
pub use vaccine::*;

/// Entity labels used in not-found reporting.
pub const PATIENT_ENTITY: &str = "Pacient";
pub const VACCINE_ENTITY: &str = "Vaccine";
pub const DOSE_ENTITY: &str = "Dose";

/// Descendant rows removed alongside a patient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    pub vaccines: u64,
    pub doses: u64,
}

// `dose_date` columns hold `YYYY-MM-DD` text, read and bound as `NaiveDate`
// through rusqlite's chrono support.

/// Column order: id, pacient_id, vaccine_name, dose_date, dose_number, vaccine_type
pub(crate) fn vaccine_from_row(row: &Row<'_>) -> rusqlite::Result<Vaccine> {
    Ok(Vaccine {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        vaccine_name: row.get(2)?,
        dose_date: row.get(3)?,
        dose_number: row.get(4)?,
        vaccine_type: row.get(5)?,
    })
}

/// Column order: id, vaccine_id, type_dose, dose_date, dose_number, application_type
pub(crate) fn dose_from_row(row: &Row<'_>) -> rusqlite::Result<Dose> {
    Ok(Dose {
        id: row.get(0)?,
        vaccine_id: row.get(1)?,
        type_dose: row.get(2)?,
        dose_date: row.get(3)?,
        dose_number: row.get(4)?,
        application_type: row.get(5)?,
    })
}
