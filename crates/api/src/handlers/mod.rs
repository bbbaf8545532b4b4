//! Request handlers.
//!
//! Handlers delegate to the repositories in `pokebox_db` (and the
//! enrichment aggregator in `pokebox_pokedex`) and map errors via
//! [`crate::error::AppError`].

pub mod pokemon;
