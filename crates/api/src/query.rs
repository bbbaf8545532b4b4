//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for read endpoints that support catalog enrichment
/// (`?enrich=`).
///
/// Enrichment is on by default; clients that only need the stored rows
/// pass `enrich=false` to skip the catalog round-trips.
#[derive(Debug, Deserialize)]
pub struct EnrichParams {
    #[serde(default = "default_enrich")]
    pub enrich: bool,
}

fn default_enrich() -> bool {
    true
}
