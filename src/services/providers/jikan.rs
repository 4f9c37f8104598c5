/// Jikan (MyAnimeList) catalog client
///
/// API flow:
/// 1. Title search: `GET /anime?q=<query>&limit=10` → ranked matches
/// 2. Details: `GET /anime/{id}` → single item, 404 for unknown ids
///
/// Jikan wraps every payload in a `data` envelope.
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use crate::{
    error::{EngineError, EngineResult},
    models::{CatalogItem, JikanAnime},
    services::providers::CatalogProvider,
};

const SEARCH_LIMIT: &str = "10";

#[derive(Clone)]
pub struct JikanCatalog {
    http_client: HttpClient,
    api_url: String,
}

impl JikanCatalog {
    /// Creates a Jikan client with a per-request timeout
    pub fn new(api_url: String, timeout: Duration) -> EngineResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            api_url,
        })
    }
}

#[async_trait::async_trait]
impl CatalogProvider for JikanCatalog {
    async fn search_by_title(&self, query: &str) -> EngineResult<Vec<CatalogItem>> {
        if query.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/anime", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("q", query), ("limit", SEARCH_LIMIT)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::ExternalApi(format!(
                "Jikan API returned status {}: {}",
                status, body
            )));
        }

        #[derive(Deserialize)]
        struct SearchResponse {
            data: Vec<JikanAnime>,
        }

        let search_response: SearchResponse = response.json().await?;
        let items: Vec<CatalogItem> = search_response
            .data
            .into_iter()
            .map(CatalogItem::from)
            .collect();

        tracing::info!(
            query = %query,
            results = items.len(),
            provider = "jikan",
            "Title search completed"
        );

        Ok(items)
    }

    async fn get_by_id(&self, id: u32) -> EngineResult<CatalogItem> {
        let url = format!("{}/anime/{}", self.api_url, id);
        let response = self.http_client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(EngineError::NotFound(format!(
                "No catalog item with id {}",
                id
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::ExternalApi(format!(
                "Jikan API returned status {}: {}",
                status, body
            )));
        }

        #[derive(Deserialize)]
        struct DetailsResponse {
            data: JikanAnime,
        }

        let details: DetailsResponse = response.json().await?;

        tracing::debug!(id = id, provider = "jikan", "Catalog item fetched");

        Ok(CatalogItem::from(details.data))
    }
}
