use crate::modules::media::domain::{MediaKind, MediaSummary, SearchQuery};
use crate::modules::provider::infrastructure::external::{GoogleBooksClient, JikanClient};
use crate::modules::provider::traits::MediaProviderClient;
use crate::shared::errors::AppResult;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fans a query out to the adapters implied by the kind filter, merges their
/// results in invocation order, and deduplicates by canonical id.
///
/// Pagination is source-local: "page N" is page N of each underlying
/// provider. Duplicate suppression across successive pages is not attempted;
/// only one call's merge is deduplicated.
pub struct SearchService {
    jikan: Arc<JikanClient>,
    books: Arc<GoogleBooksClient>,
}

impl SearchService {
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_clients(
            Arc::new(JikanClient::new()?),
            Arc::new(GoogleBooksClient::new()?),
        ))
    }

    pub fn with_clients(jikan: Arc<JikanClient>, books: Arc<GoogleBooksClient>) -> Self {
        Self { jikan, books }
    }

    /// Aggregate search across providers. Never fails: a provider that
    /// errors out contributes an empty slice and the rest still count.
    pub async fn search_all(&self, query: &SearchQuery) -> Vec<MediaSummary> {
        let text = query.text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let page = query.page.max(1);
        let filter = query.kind_filter;

        let run_anime = matches!(filter, None | Some(MediaKind::Anime));
        let run_manga = matches!(
            filter,
            None | Some(MediaKind::Manga) | Some(MediaKind::Manhwa)
        );
        let run_books = matches!(filter, None | Some(MediaKind::Book));

        // Fan-out: at most 3 concurrent adapter calls, all settled before
        // the merge (one slow or failed adapter never poisons the others)
        let anime = async {
            if !run_anime {
                return Vec::new();
            }
            Self::degrade(
                self.jikan
                    .search(text, Some(MediaKind::Anime), page, query.include_mature)
                    .await,
                "Jikan anime search",
            )
        };
        let manga = async {
            if !run_manga {
                return Vec::new();
            }
            Self::degrade(
                self.jikan
                    .search(text, Some(MediaKind::Manga), page, query.include_mature)
                    .await,
                "Jikan manga search",
            )
        };
        let books = async {
            if !run_books {
                return Vec::new();
            }
            Self::degrade(
                self.books
                    .search(text, Some(MediaKind::Book), page, query.include_mature)
                    .await,
                "Google Books search",
            )
        };

        let (anime, manga, books) = futures::join!(anime, manga, books);

        let mut merged = Vec::with_capacity(anime.len() + manga.len() + books.len());
        merged.extend(anime);
        merged.extend(manga);
        merged.extend(books);

        let mut results = Self::dedup_by_id(merged);

        // The manga endpoint returns a manga/manhwa superset; an explicit
        // manhwa filter is only enforceable after normalization
        if filter == Some(MediaKind::Manhwa) {
            results.retain(|item| item.kind == MediaKind::Manhwa);
        }

        debug!(
            "Aggregate search '{}' (filter {:?}, page {}) returned {} results",
            text,
            filter,
            page,
            results.len()
        );

        results
    }

    fn degrade(result: AppResult<Vec<MediaSummary>>, operation: &str) -> Vec<MediaSummary> {
        match result {
            Ok(items) => items,
            Err(e) => {
                warn!("{} degraded to empty result: {}", operation, e);
                Vec::new()
            }
        }
    }

    /// First-seen-wins, insertion order preserved. Stable order matters for
    /// deterministic pagination display.
    fn dedup_by_id(items: Vec<MediaSummary>) -> Vec<MediaSummary> {
        let mut seen = HashSet::with_capacity(items.len());
        items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, kind: MediaKind) -> MediaSummary {
        MediaSummary {
            id: id.to_string(),
            title: id.to_string(),
            kind,
            format: "TV".to_string(),
            synopsis: "No synopsis available.".to_string(),
            total_units: None,
            cover_url: None,
            genres: Vec::new(),
        }
    }

    #[test]
    fn dedup_keeps_first_occurrence_and_order() {
        let deduped = SearchService::dedup_by_id(vec![
            summary("mal-1", MediaKind::Anime),
            summary("mal-2", MediaKind::Manga),
            summary("mal-1", MediaKind::Manga),
            summary("gb-1", MediaKind::Book),
        ]);

        let ids: Vec<&str> = deduped.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["mal-1", "mal-2", "gb-1"]);
        assert_eq!(deduped[0].kind, MediaKind::Anime);
    }

    #[test]
    fn degrade_swallows_errors() {
        use crate::shared::errors::AppError;

        let ok = SearchService::degrade(Ok(vec![summary("mal-1", MediaKind::Anime)]), "op");
        assert_eq!(ok.len(), 1);

        let degraded: Vec<MediaSummary> =
            SearchService::degrade(Err(AppError::ApiError("boom".to_string())), "op");
        assert!(degraded.is_empty());
    }
}
