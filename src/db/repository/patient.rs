use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{dose_from_row, vaccine_from_row, CascadeSummary, PATIENT_ENTITY};
use crate::db::DatabaseError;
use crate::models::*;

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        last_name: row.get(2)?,
    })
}

pub fn insert_patient(conn: &Connection, fields: &PatientFields) -> Result<Patient, DatabaseError> {
    conn.execute(
        "INSERT INTO pacient (name, last_name) VALUES (?1, ?2)",
        params![fields.name, fields.last_name],
    )?;
    get_patient(conn, conn.last_insert_rowid())
}

pub fn get_all_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name, last_name FROM pacient ORDER BY id")?;
    let rows = stmt.query_map([], patient_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn get_patient(conn: &Connection, id: i64) -> Result<Patient, DatabaseError> {
    conn.query_row(
        "SELECT id, name, last_name FROM pacient WHERE id = ?1",
        params![id],
        patient_from_row,
    )
    .optional()?
    .ok_or_else(|| DatabaseError::not_found(PATIENT_ENTITY, id))
}

pub fn patient_exists(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let found = conn
        .query_row("SELECT 1 FROM pacient WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Overwrite both name fields of an existing patient.
pub fn update_patient(
    conn: &Connection,
    id: i64,
    fields: &PatientFields,
) -> Result<Patient, DatabaseError> {
    let changed = conn.execute(
        "UPDATE pacient SET name = ?1, last_name = ?2 WHERE id = ?3",
        params![fields.name, fields.last_name, id],
    )?;
    if changed == 0 {
        return Err(DatabaseError::not_found(PATIENT_ENTITY, id));
    }
    get_patient(conn, id)
}

/// Delete a patient; its vaccines and their doses go with it via
/// `ON DELETE CASCADE`. Returns how many descendant rows were removed.
pub fn delete_patient(conn: &Connection, id: i64) -> Result<CascadeSummary, DatabaseError> {
    let summary = count_patient_descendants(conn, id)?;
    let changed = conn.execute("DELETE FROM pacient WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(DatabaseError::not_found(PATIENT_ENTITY, id));
    }
    Ok(summary)
}

pub fn count_patient_descendants(conn: &Connection, id: i64) -> Result<CascadeSummary, DatabaseError> {
    let (vaccines, doses) = conn.query_row(
        "SELECT
            (SELECT COUNT(*) FROM vaccine WHERE pacient_id = ?1),
            (SELECT COUNT(*) FROM dose d JOIN vaccine v ON d.vaccine_id = v.id
              WHERE v.pacient_id = ?1)",
        params![id],
        |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
    )?;
    Ok(CascadeSummary {
        vaccines: vaccines as u64,
        doses: doses as u64,
    })
}

/// Assemble a patient with all of its vaccines, each with all of its doses.
pub fn get_patient_detail(conn: &Connection, id: i64) -> Result<PatientDetail, DatabaseError> {
    let patient = get_patient(conn, id)?;

    let mut dose_stmt = conn.prepare(
        "SELECT d.id, d.vaccine_id, d.type_dose, d.dose_date, d.dose_number, d.application_type
         FROM dose d JOIN vaccine v ON d.vaccine_id = v.id
         WHERE v.pacient_id = ?1
         ORDER BY d.id",
    )?;
    let mut doses_by_vaccine: HashMap<i64, Vec<Dose>> = HashMap::new();
    for dose in dose_stmt.query_map(params![id], dose_from_row)? {
        let dose = dose?;
        doses_by_vaccine.entry(dose.vaccine_id).or_default().push(dose);
    }

    let mut vaccine_stmt = conn.prepare(
        "SELECT id, pacient_id, vaccine_name, dose_date, dose_number, vaccine_type
         FROM vaccine WHERE pacient_id = ?1 ORDER BY id",
    )?;
    let vaccines = vaccine_stmt
        .query_map(params![id], vaccine_from_row)?
        .map(|vaccine| {
            vaccine.map(|vaccine| VaccineDetail {
                doses: doses_by_vaccine.remove(&vaccine.id).unwrap_or_default(),
                vaccine,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PatientDetail { patient, vaccines })
}
