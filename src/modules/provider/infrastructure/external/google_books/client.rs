use crate::modules::media::domain::{MediaDetails, MediaKind, MediaSummary};
use crate::modules::provider::domain::{MediaProvider, RESULTS_PER_PAGE};
use crate::modules::provider::infrastructure::external::HttpHandler;
use crate::modules::provider::traits::MediaProviderClient;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use super::{
    dto::{GoogleBooksVolume, GoogleBooksVolumeList},
    mapper::GoogleBooksMapper,
};

const GOOGLE_BOOKS_API_BASE: &str = "https://www.googleapis.com/books/v1";

/// Client for the Google Books volumes API. Google Books has no mature-
/// content toggle comparable to Jikan's, so that flag is ignored here.
pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
}

impl GoogleBooksClient {
    pub fn new() -> AppResult<Self> {
        Self::with_base_url(GOOGLE_BOOKS_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(30, "Shiori-Media-Tracker/1.0")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn fetch_volume(&self, native_id: &str) -> AppResult<GoogleBooksVolume> {
        let url = format!("{}/volumes/{}", self.base_url, native_id);
        let response =
            HttpHandler::execute(self.client.get(&url), "Google Books", "get volume").await?;

        response
            .json::<GoogleBooksVolume>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Google Books response: {}", e)))
    }
}

#[async_trait]
impl MediaProviderClient for GoogleBooksClient {
    fn provider_type(&self) -> MediaProvider {
        MediaProvider::GoogleBooks
    }

    async fn search(
        &self,
        query: &str,
        _kind: Option<MediaKind>,
        page: u32,
        _include_mature: bool,
    ) -> AppResult<Vec<MediaSummary>> {
        // Google Books paginates by item offset, not page number
        let start_index = (page.max(1) - 1) * RESULTS_PER_PAGE;

        let url = format!("{}/volumes", self.base_url);
        let response = HttpHandler::execute(
            self.client.get(&url).query(&[
                ("q", query.trim()),
                ("startIndex", &start_index.to_string()),
                ("maxResults", &RESULTS_PER_PAGE.to_string()),
                ("printType", "books"),
            ]),
            "Google Books",
            "search volumes",
        )
        .await?;

        let list = response
            .json::<GoogleBooksVolumeList>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Google Books response: {}", e)))?;

        Ok(list
            .items
            .into_iter()
            .filter_map(GoogleBooksMapper::to_summary)
            .collect())
    }

    /// Books never carry relations, trailers, or characters; the only thing
    /// the volume endpoint adds is a higher-resolution cover.
    async fn fetch_details(&self, item: &MediaSummary) -> AppResult<MediaDetails> {
        let native_id = MediaProvider::GoogleBooks.native_id(&item.id).ok_or_else(|| {
            AppError::InvalidInput(format!("Not a Google Books canonical id: {}", item.id))
        })?;

        let mut details = MediaDetails::from_summary(item.clone());

        match self.fetch_volume(native_id).await {
            Ok(volume) => {
                if let Some(links) = volume.volume_info.image_links.as_ref() {
                    if let Some(cover) = GoogleBooksMapper::pick_detail_cover(links) {
                        details.summary.cover_url = Some(cover);
                    }
                }
            }
            Err(e) => warn!("Google Books volume fetch failed for {}: {}", item.id, e),
        }

        Ok(details)
    }
}
