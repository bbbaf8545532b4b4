//! Pokédex catalog client and read-path enrichment.
//!
//! Wraps the external Pokédex catalog service's HTTP API using
//! [`reqwest`] and provides the aggregator that attaches transient
//! catalog summaries to stored Pokémon instances.

pub mod api;
pub mod catalog;
pub mod enrich;

pub use api::{PokedexApi, PokedexApiError};
pub use catalog::CatalogSummary;
pub use enrich::{enrich_instance, enrich_instances, EnrichedInstance};
