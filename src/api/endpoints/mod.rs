//! API endpoint handlers, one module per record type.

pub mod doses;
pub mod health;
pub mod patients;
pub mod vaccines;
