//! REST API client for the Pokédex catalog service.
//!
//! Performs bounded-timeout lookups of catalog entries using
//! [`reqwest`]. No retries: the enrichment layer treats every failure
//! as a degraded (summary-less) read.

use std::time::Duration;

use crate::catalog::CatalogSummary;

/// HTTP client for the Pokédex catalog service.
pub struct PokedexApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the catalog API layer.
#[derive(Debug, thiserror::Error)]
pub enum PokedexApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Pokédex API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl PokedexApi {
    /// Create a new API client for the catalog service.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://pokedex-service:3003`.
    /// * `timeout` - Per-lookup request timeout.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, base_url }
    }

    /// Fetch the catalog summary for a Pokédex entry.
    ///
    /// Sends a `GET /pokedex/pokemon/{id}` request. Extra fields in the
    /// catalog payload (moves, abilities, measurements) are ignored.
    pub async fn get_pokemon(&self, pokemon_id: i32) -> Result<CatalogSummary, PokedexApiError> {
        let response = self
            .client
            .get(format!("{}/pokedex/pokemon/{}", self.base_url, pokemon_id))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<CatalogSummary>().await?)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`PokedexApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PokedexApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PokedexApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
