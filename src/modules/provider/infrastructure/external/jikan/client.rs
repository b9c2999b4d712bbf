use crate::modules::media::domain::{MediaDetails, MediaKind, MediaSummary};
use crate::modules::provider::domain::{MediaProvider, RESULTS_PER_PAGE};
use crate::modules::provider::infrastructure::external::HttpHandler;
use crate::modules::provider::traits::MediaProviderClient;
use crate::shared::{
    errors::{AppError, AppResult},
    utils::RateLimiter,
};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::warn;

use super::{
    dto::{JikanCharacterEntry, JikanCharactersResponse, JikanFullResponse, JikanListResponse,
        JikanMedia, JikanSearchParams},
    mapper::JikanMapper,
};

const JIKAN_API_BASE: &str = "https://api.jikan.moe/v4";

/// Client for the Jikan (MyAnimeList) API, serving anime and manga/manhwa.
/// One pacer covers every request because Jikan enforces its request-per-
/// second ceiling across all endpoints (roughly 3 requests per second).
pub struct JikanClient {
    client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter>,
}

impl JikanClient {
    pub fn new() -> AppResult<Self> {
        Self::with_config(JIKAN_API_BASE, Arc::new(RateLimiter::new(3.0)))
    }

    /// Construct against a custom base URL and pacer. Tests use this to run
    /// against a local server without wall-clock delay.
    pub fn with_config(
        base_url: impl Into<String>,
        rate_limiter: Arc<RateLimiter>,
    ) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(30, "Shiori-Media-Tracker/1.0")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            rate_limiter,
        })
    }

    /// Jikan splits moving pictures and print serials into two endpoints;
    /// manga and manhwa share the `manga` one.
    fn endpoint_for(kind: Option<MediaKind>) -> &'static str {
        match kind {
            Some(MediaKind::Manga) | Some(MediaKind::Manhwa) => "manga",
            _ => "anime",
        }
    }

    async fn search_page(
        &self,
        endpoint: &str,
        query: &str,
        page: u32,
        include_mature: bool,
    ) -> AppResult<Vec<MediaSummary>> {
        self.rate_limiter.wait().await;

        let params = JikanSearchParams {
            q: query.trim().to_string(),
            limit: RESULTS_PER_PAGE,
            page,
            // sfw=false is what *allows* mature entries through
            sfw: !include_mature,
        };

        let url = format!("{}/{}", self.base_url, endpoint);
        let response = HttpHandler::execute(
            self.client.get(&url).query(&params),
            "Jikan",
            &format!("search {}", endpoint),
        )
        .await?;

        let list = response
            .json::<JikanListResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(list
            .data
            .into_iter()
            .map(|item| JikanMapper::to_summary(item, None))
            .collect())
    }

    async fn fetch_full(&self, endpoint: &str, native_id: &str) -> AppResult<JikanMedia> {
        self.rate_limiter.wait().await;

        let url = format!("{}/{}/{}/full", self.base_url, endpoint, native_id);
        let response =
            HttpHandler::execute(self.client.get(&url), "Jikan", "get full record").await?;

        let full = response
            .json::<JikanFullResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(full.data)
    }

    async fn fetch_characters(
        &self,
        endpoint: &str,
        native_id: &str,
    ) -> AppResult<Vec<JikanCharacterEntry>> {
        self.rate_limiter.wait().await;

        let url = format!("{}/{}/{}/characters", self.base_url, endpoint, native_id);
        let response =
            HttpHandler::execute(self.client.get(&url), "Jikan", "get characters").await?;

        let characters = response
            .json::<JikanCharactersResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(characters.data)
    }
}

#[async_trait]
impl MediaProviderClient for JikanClient {
    fn provider_type(&self) -> MediaProvider {
        MediaProvider::Jikan
    }

    async fn search(
        &self,
        query: &str,
        kind: Option<MediaKind>,
        page: u32,
        include_mature: bool,
    ) -> AppResult<Vec<MediaSummary>> {
        self.search_page(Self::endpoint_for(kind), query, page, include_mature)
            .await
    }

    /// Two sequential, paced sub-requests: the full record (relations, and a
    /// trailer for anime) and the cast roster. Either one failing only
    /// leaves its fields empty.
    async fn fetch_details(&self, item: &MediaSummary) -> AppResult<MediaDetails> {
        let native_id = MediaProvider::Jikan.native_id(&item.id).ok_or_else(|| {
            AppError::InvalidInput(format!("Not a Jikan canonical id: {}", item.id))
        })?;
        let endpoint = if item.kind == MediaKind::Anime {
            "anime"
        } else {
            "manga"
        };

        let mut details = MediaDetails::from_summary(item.clone());

        match self.fetch_full(endpoint, native_id).await {
            Ok(full) => {
                details.relations = JikanMapper::to_relations(full.relations);
                if item.kind == MediaKind::Anime {
                    details.trailer_url = full.trailer.and_then(|t| t.embed_url);
                }
            }
            Err(e) => warn!("Jikan full record fetch failed for {}: {}", item.id, e),
        }

        match self.fetch_characters(endpoint, native_id).await {
            Ok(entries) => details.characters = JikanMapper::to_characters(entries),
            Err(e) => warn!("Jikan characters fetch failed for {}: {}", item.id, e),
        }

        Ok(details)
    }
}
