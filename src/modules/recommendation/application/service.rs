use crate::modules::media::domain::{MediaSummary, SearchQuery};
use crate::modules::provider::infrastructure::service::SearchService;
use crate::modules::recommendation::infrastructure::GeminiClient;
use crate::shared::config::EngineConfig;
use crate::shared::errors::AppResult;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns the external generator's bare candidate titles into concrete,
/// displayable items by re-running the aggregate search per title and
/// picking a best match.
pub struct RecommendationService {
    search: Arc<SearchService>,
    generator: Option<GeminiClient>,
}

impl RecommendationService {
    pub fn new(search: Arc<SearchService>, config: &EngineConfig) -> AppResult<Self> {
        let generator = match &config.gemini_api_key {
            Some(key) => Some(GeminiClient::new(key.clone())?),
            None => None,
        };
        Ok(Self::with_generator(search, generator))
    }

    pub fn with_generator(search: Arc<SearchService>, generator: Option<GeminiClient>) -> Self {
        Self { search, generator }
    }

    /// Produce a discovery list in the generator's candidate order. Always
    /// returns a (possibly empty) list: an empty library, a missing
    /// credential, or a failed generator call all degrade to no
    /// recommendations. Candidates whose search yields nothing are dropped,
    /// so the output may hold fewer items than the generator returned.
    pub async fn get_recommendations(&self, library_titles: &[String]) -> Vec<MediaSummary> {
        if library_titles.is_empty() {
            return Vec::new();
        }

        let Some(generator) = &self.generator else {
            debug!("No generator credential configured, skipping recommendations");
            return Vec::new();
        };

        let titles = match generator.generate_titles(library_titles).await {
            Ok(titles) => titles,
            Err(e) => {
                warn!("Recommendation generator call failed: {}", e);
                return Vec::new();
            }
        };

        let mut hydrated = Vec::with_capacity(titles.len());

        // Sequential on purpose: one aggregate search at a time bounds the
        // outbound load on the providers
        for title in titles {
            let results = self.search.search_all(&SearchQuery::new(title.clone())).await;

            match Self::select_match(&title, results) {
                Some(item) => hydrated.push(item),
                None => debug!("No search results for recommended title '{}'", title),
            }
        }

        hydrated
    }

    /// A case-insensitive exact title match wins; otherwise the first
    /// (highest-ranked) result stands in.
    fn select_match(candidate: &str, results: Vec<MediaSummary>) -> Option<MediaSummary> {
        let wanted = candidate.to_lowercase();
        let exact = results
            .iter()
            .find(|item| item.title.to_lowercase() == wanted)
            .cloned();

        exact.or_else(|| results.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::domain::MediaKind;

    fn summary(id: &str, title: &str) -> MediaSummary {
        MediaSummary {
            id: id.to_string(),
            title: title.to_string(),
            kind: MediaKind::Anime,
            format: "TV".to_string(),
            synopsis: "No synopsis available.".to_string(),
            total_units: None,
            cover_url: None,
            genres: Vec::new(),
        }
    }

    #[test]
    fn exact_match_wins_over_rank() {
        let results = vec![
            summary("mal-1", "Berserk: The Golden Age"),
            summary("mal-2", "Berserk"),
        ];
        let picked = RecommendationService::select_match("berserk", results).unwrap();
        assert_eq!(picked.id, "mal-2");
    }

    #[test]
    fn falls_back_to_first_result() {
        let results = vec![
            summary("mal-1", "Berserk: The Golden Age"),
            summary("mal-2", "Berserk Prototype"),
        ];
        let picked = RecommendationService::select_match("Berserk", results).unwrap();
        assert_eq!(picked.id, "mal-1");
    }

    #[test]
    fn empty_results_drop_the_candidate() {
        assert!(RecommendationService::select_match("Berserk", Vec::new()).is_none());
    }
}
