//! Middleware applied to every API route.

pub mod access;
pub mod headers;
