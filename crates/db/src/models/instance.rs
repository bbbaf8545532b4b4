//! Pokémon instance entity model and DTOs.

use pokebox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A Pokémon instance row from the `pokemon_instances` table.
///
/// `id`, `user_id`, and `pokemon_id` are immutable after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Instance {
    pub id: DbId,
    /// Owning user. An instance always belongs to exactly one user.
    pub user_id: DbId,
    /// Pokédex catalog entry this instance was caught from.
    pub pokemon_id: i32,
    pub nickname: Option<String>,
    pub level: i32,
    pub experience: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub sp_attack: i32,
    pub sp_defense: i32,
    pub speed: i32,
    pub is_shiny: bool,
    pub gender: String,
    pub ability: Option<String>,
    pub held_item: Option<String>,
    pub obtained_at: Timestamp,
}

/// DTO for adding a Pokémon to a user's box.
///
/// The owner is never part of the body; handlers take it from the
/// authenticated route. `pokemon_id` is the only required field.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstance {
    pub pokemon_id: i32,
    pub nickname: Option<String>,
    /// Defaults to 1 if omitted.
    pub level: Option<i32>,
    pub experience: Option<i32>,
    pub hp: Option<i32>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub sp_attack: Option<i32>,
    pub sp_defense: Option<i32>,
    pub speed: Option<i32>,
    pub is_shiny: Option<bool>,
    /// Defaults to `"unknown"` if omitted.
    pub gender: Option<String>,
    pub ability: Option<String>,
    pub held_item: Option<String>,
}

/// DTO for updating an existing instance. All fields are optional.
///
/// `id`, `user_id`, and `pokemon_id` are deliberately absent: requests
/// naming them are silently discarded during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInstance {
    pub nickname: Option<String>,
    pub level: Option<i32>,
    pub experience: Option<i32>,
    pub hp: Option<i32>,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub sp_attack: Option<i32>,
    pub sp_defense: Option<i32>,
    pub speed: Option<i32>,
    pub is_shiny: Option<bool>,
    pub gender: Option<String>,
    pub ability: Option<String>,
    pub held_item: Option<String>,
}
