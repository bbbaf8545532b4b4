//! Shared domain types and errors for the pokebox services.

pub mod error;
pub mod types;
