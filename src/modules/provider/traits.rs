use crate::modules::media::domain::{MediaDetails, MediaKind, MediaSummary};
use crate::modules::provider::domain::MediaProvider;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Capability seam implemented by every provider client.
///
/// `search` issues exactly one paginated list request; `kind` narrows the
/// provider-side endpoint where the provider distinguishes kinds (Jikan's
/// anime vs manga paths) and is ignored otherwise. `fetch_details` is
/// best-effort: sub-request failures degrade fields, they never fail the
/// whole call.
#[async_trait]
pub trait MediaProviderClient: Send + Sync {
    /// Get the provider this client handles
    fn provider_type(&self) -> MediaProvider;

    /// Search one page of results (15 per page across all providers)
    async fn search(
        &self,
        query: &str,
        kind: Option<MediaKind>,
        page: u32,
        include_mature: bool,
    ) -> AppResult<Vec<MediaSummary>>;

    /// Fetch extended fields for one previously returned result
    async fn fetch_details(&self, item: &MediaSummary) -> AppResult<MediaDetails>;
}
