use crate::modules::media::domain::{MediaDetails, MediaSummary};
use crate::modules::provider::domain::MediaProvider;
use crate::modules::provider::infrastructure::external::{GoogleBooksClient, JikanClient};
use crate::modules::provider::traits::MediaProviderClient;
use crate::shared::errors::AppResult;
use std::sync::Arc;
use tracing::warn;

/// Enriches one canonical result with the extended fields its origin
/// provider exposes. Routing goes by the id namespace prefix, not the media
/// kind: manga and books share no provider, but the kind alone cannot tell a
/// Jikan manga from anything else.
pub struct DetailService {
    clients: Vec<Arc<dyn MediaProviderClient>>,
}

impl DetailService {
    pub fn new() -> AppResult<Self> {
        let jikan: Arc<dyn MediaProviderClient> = Arc::new(JikanClient::new()?);
        let books: Arc<dyn MediaProviderClient> = Arc::new(GoogleBooksClient::new()?);
        Ok(Self::with_clients(vec![jikan, books]))
    }

    pub fn with_clients(clients: Vec<Arc<dyn MediaProviderClient>>) -> Self {
        Self { clients }
    }

    /// Total: always yields a record whose base fields equal the input's,
    /// even when every sub-request fails or the provider is unknown.
    pub async fn enrich(&self, item: &MediaSummary) -> MediaDetails {
        let Some(provider) = MediaProvider::from_canonical_id(&item.id) else {
            warn!("Unknown provider prefix in id '{}', skipping enrichment", item.id);
            return MediaDetails::from_summary(item.clone());
        };

        let Some(client) = self
            .clients
            .iter()
            .find(|client| client.provider_type() == provider)
        else {
            warn!("No client registered for provider {}", provider);
            return MediaDetails::from_summary(item.clone());
        };

        match client.fetch_details(item).await {
            Ok(details) => details,
            Err(e) => {
                warn!("Detail enrichment failed for {}: {}", item.id, e);
                MediaDetails::from_summary(item.clone())
            }
        }
    }
}
