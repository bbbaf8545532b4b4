//! Route registration.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                          service + database health (public)
//!
//! /pokemon/user/{user_id}          list (GET), add (POST)
//! /pokemon/user/{user_id}/count    box size (GET)
//! /pokemon/{id}                    get, update, release (GET, PUT, DELETE)
//! ```
//!
//! All `/pokemon` routes require a Bearer token; the `{user_id}`-scoped
//! routes additionally require the path id to match the token subject.

pub mod health;
pub mod pokemon;
