use std::path::Path;

use rusqlite::Connection;

use super::DatabaseError;

const SCHEMA: &str = include_str!("../../resources/schema.sql");

/// Open a SQLite connection to the given path and ensure the schema exists.
///
/// The parent directory is created when missing.
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| DatabaseError::SchemaFailed(format!("{}: {e}", parent.display())))?;
    }
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    initialize_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    initialize_schema(&conn)?;
    Ok(conn)
}

/// `busy_timeout` comes first so the remaining pragmas and the schema
/// batch also wait out a writer holding the lock.
fn configure_pragmas(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "PRAGMA busy_timeout=5000;
         PRAGMA journal_mode=WAL;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Create the record tables if absent. Safe to run on every open.
pub fn initialize_schema(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(SCHEMA).map_err(|e| {
        tracing::error!(error = %e, "Schema initialization failed");
        DatabaseError::SchemaFailed(e.to_string())
    })
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_initializes_all_tables() {
        let conn = open_memory_database().unwrap();
        assert_eq!(count_tables(&conn).unwrap(), 3);
    }

    #[test]
    fn schema_initialization_idempotent() {
        let conn = open_memory_database().unwrap();
        assert!(initialize_schema(&conn).is_ok());
        assert_eq!(count_tables(&conn).unwrap(), 3);
    }

    #[test]
    fn foreign_keys_enabled() {
        let conn = open_memory_database().unwrap();
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn file_database_creates_parent_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("records.db");
        let conn = open_database(&path).unwrap();
        assert!(path.exists());
        assert_eq!(count_tables(&conn).unwrap(), 3);
    }

    #[test]
    fn orphan_vaccine_rejected_by_foreign_key() {
        let conn = open_memory_database().unwrap();
        let result = conn.execute(
            "INSERT INTO vaccine (pacient_id, vaccine_name, dose_date, dose_number, vaccine_type)
             VALUES (99999, 'BCG', '2023-01-01', 1, 'live')",
            [],
        );
        assert!(result.is_err());
    }
}
