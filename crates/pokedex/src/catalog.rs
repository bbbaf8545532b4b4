//! Catalog summary types.
//!
//! These mirror the subset of the Pokédex catalog payload this service
//! relays. The catalog emits camelCase JSON; summaries are passed
//! through to clients in the same naming, so the types both deserialize
//! the catalog response and serialize the outgoing attachment.
//! Summaries are ephemeral: fetched live per read, never persisted.

use serde::{Deserialize, Serialize};

/// Transient reference data attached to an instance for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub name: String,
    pub types: Vec<String>,
    pub sprites: SpriteSet,
    /// The catalog exposes this object under the key `stats`.
    #[serde(rename(serialize = "baseStats", deserialize = "stats"))]
    pub base_stats: BaseStats,
}

/// Sprite URLs for a catalog entry. Any of them may be missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteSet {
    pub front: Option<String>,
    pub back: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    pub artwork: Option<String>,
}

/// Species base stats (not the per-instance battle stats).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub sp_attack: i32,
    pub sp_defense: i32,
    pub speed: i32,
}
