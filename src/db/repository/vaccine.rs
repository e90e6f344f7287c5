use rusqlite::{params, Connection, OptionalExtension};

use super::{dose_from_row, patient_exists, vaccine_from_row, PATIENT_ENTITY, VACCINE_ENTITY};
use crate::db::DatabaseError;
use crate::models::*;

const VACCINE_COLUMNS: &str =
    "id, pacient_id, vaccine_name, dose_date, dose_number, vaccine_type";

/// Insert a vaccine under an existing patient.
///
/// The owning patient is checked first so a missing parent surfaces as
/// `NotFound` rather than a foreign-key failure.
pub fn insert_vaccine(conn: &Connection, new: &NewVaccine) -> Result<Vaccine, DatabaseError> {
    if !patient_exists(conn, new.patient_id)? {
        return Err(DatabaseError::not_found(PATIENT_ENTITY, new.patient_id));
    }
    let fields = &new.fields;
    conn.execute(
        "INSERT INTO vaccine (pacient_id, vaccine_name, dose_date, dose_number, vaccine_type)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            new.patient_id,
            fields.vaccine_name,
            fields.dose_date,
            fields.dose_number,
            fields.vaccine_type,
        ],
    )?;
    get_vaccine(conn, conn.last_insert_rowid())
}

pub fn get_all_vaccines(conn: &Connection) -> Result<Vec<Vaccine>, DatabaseError> {
    let mut stmt = conn.prepare(&format!("SELECT {VACCINE_COLUMNS} FROM vaccine ORDER BY id"))?;
    let rows = stmt.query_map([], vaccine_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn get_vaccine(conn: &Connection, id: i64) -> Result<Vaccine, DatabaseError> {
    conn.query_row(
        &format!("SELECT {VACCINE_COLUMNS} FROM vaccine WHERE id = ?1"),
        params![id],
        vaccine_from_row,
    )
    .optional()?
    .ok_or_else(|| DatabaseError::not_found(VACCINE_ENTITY, id))
}

pub fn vaccine_exists(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let found = conn
        .query_row("SELECT 1 FROM vaccine WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

pub fn get_vaccine_detail(conn: &Connection, id: i64) -> Result<VaccineDetail, DatabaseError> {
    let vaccine = get_vaccine(conn, id)?;
    let mut stmt = conn.prepare(
        "SELECT id, vaccine_id, type_dose, dose_date, dose_number, application_type
         FROM dose WHERE vaccine_id = ?1 ORDER BY id",
    )?;
    let doses = stmt
        .query_map(params![id], dose_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(VaccineDetail { vaccine, doses })
}

/// Overwrite every mutable field. The owning patient is left untouched.
pub fn update_vaccine(
    conn: &Connection,
    id: i64,
    fields: &VaccineFields,
) -> Result<Vaccine, DatabaseError> {
    let changed = conn.execute(
        "UPDATE vaccine
         SET vaccine_name = ?1, dose_date = ?2, dose_number = ?3, vaccine_type = ?4
         WHERE id = ?5",
        params![
            fields.vaccine_name,
            fields.dose_date,
            fields.dose_number,
            fields.vaccine_type,
            id,
        ],
    )?;
    if changed == 0 {
        return Err(DatabaseError::not_found(VACCINE_ENTITY, id));
    }
    get_vaccine(conn, id)
}

/// Delete a vaccine and, by cascade, its doses. Returns the dose count removed.
pub fn delete_vaccine(conn: &Connection, id: i64) -> Result<u64, DatabaseError> {
    let doses: i64 = conn.query_row(
        "SELECT COUNT(*) FROM dose WHERE vaccine_id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    let changed = conn.execute("DELETE FROM vaccine WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::not_found(VACCINE_ENTITY, id));
    }
    Ok(doses as u64)
}
