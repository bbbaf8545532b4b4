//! Read-path enrichment aggregator.
//!
//! Attaches a live [`CatalogSummary`] to each stored instance. The one
//! real contract here: a catalog failure degrades that single record
//! (summary omitted), it never fails the overall read.

use pokebox_db::models::instance::Instance;
use serde::Serialize;

use crate::api::PokedexApi;
use crate::catalog::CatalogSummary;

/// An instance plus its transient catalog summary.
///
/// Serializes as the instance's own fields with an optional `summary`
/// key; the key is absent entirely when the lookup was skipped or
/// failed.
#[derive(Debug, Serialize)]
pub struct EnrichedInstance {
    #[serde(flatten)]
    pub instance: Instance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CatalogSummary>,
}

/// Enrich a single instance.
///
/// With `enrich` false the instance passes through untouched. Otherwise
/// performs one bounded-timeout catalog lookup keyed by `pokemon_id`;
/// any failure (timeout, non-200, network error) is logged and leaves
/// the summary empty.
pub async fn enrich_instance(api: &PokedexApi, instance: Instance, enrich: bool) -> EnrichedInstance {
    if !enrich {
        return EnrichedInstance {
            instance,
            summary: None,
        };
    }

    let summary = match api.get_pokemon(instance.pokemon_id).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::warn!(
                instance_id = instance.id,
                pokemon_id = instance.pokemon_id,
                error = %e,
                "Catalog lookup failed, returning instance without summary"
            );
            None
        }
    };

    EnrichedInstance { instance, summary }
}

/// Enrich a list of instances, one lookup per record.
///
/// Lookups run sequentially and independently; a failed lookup degrades
/// only its own record. Always returns one element per input instance.
pub async fn enrich_instances(
    api: &PokedexApi,
    instances: Vec<Instance>,
    enrich: bool,
) -> Vec<EnrichedInstance> {
    let mut enriched = Vec::with_capacity(instances.len());
    for instance in instances {
        enriched.push(enrich_instance(api, instance, enrich).await);
    }
    enriched
}
