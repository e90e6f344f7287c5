use rusqlite::{params, Connection, OptionalExtension};

use super::{dose_from_row, vaccine_exists, DOSE_ENTITY, VACCINE_ENTITY};
use crate::db::DatabaseError;
use crate::models::*;

const DOSE_COLUMNS: &str =
    "id, vaccine_id, type_dose, dose_date, dose_number, application_type";

/// Insert a dose under an existing vaccine (`NotFound` when it is absent).
pub fn insert_dose(conn: &Connection, new: &NewDose) -> Result<Dose, DatabaseError> {
    if !vaccine_exists(conn, new.vaccine_id)? {
        return Err(DatabaseError::not_found(VACCINE_ENTITY, new.vaccine_id));
    }
    let fields = &new.fields;
    conn.execute(
        "INSERT INTO dose (vaccine_id, type_dose, dose_date, dose_number, application_type)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            new.vaccine_id,
            fields.type_dose,
            fields.dose_date,
            fields.dose_number,
            fields.application_type,
        ],
    )?;
    get_dose(conn, conn.last_insert_rowid())
}

pub fn get_all_doses(conn: &Connection) -> Result<Vec<Dose>, DatabaseError> {
    let mut stmt = conn.prepare(&format!("SELECT {DOSE_COLUMNS} FROM dose ORDER BY id"))?;
    let rows = stmt.query_map([], dose_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn get_dose(conn: &Connection, id: i64) -> Result<Dose, DatabaseError> {
    conn.query_row(
        &format!("SELECT {DOSE_COLUMNS} FROM dose WHERE id = ?1"),
        params![id],
        dose_from_row,
    )
    .optional()?
    .ok_or_else(|| DatabaseError::not_found(DOSE_ENTITY, id))
}

pub fn update_dose(conn: &Connection, id: i64, fields: &DoseFields) -> Result<Dose, DatabaseError> {
    let changed = conn.execute(
        "UPDATE dose
         SET type_dose = ?1, dose_date = ?2, dose_number = ?3, application_type = ?4
         WHERE id = ?5",
        params![
            fields.type_dose,
            fields.dose_date,
            fields.dose_number,
            fields.application_type,
            id,
        ],
    )?;
    if changed == 0 {
        return Err(DatabaseError::not_found(DOSE_ENTITY, id));
    }
    get_dose(conn, id)
}

pub fn delete_dose(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    let changed = conn.execute("DELETE FROM dose WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::not_found(DOSE_ENTITY, id));
    }
    Ok(())
}
