pub mod repository;
pub mod sqlite;

pub use repository::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),
}

impl DatabaseError {
    pub fn not_found(entity_type: &'static str, id: i64) -> Self {
        DatabaseError::NotFound { entity_type, id }
    }
}
