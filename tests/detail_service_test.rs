//! Detail enrichment routing and totality tests.

use mockito::ServerGuard;
use serde_json::json;
use shiori::modules::provider::infrastructure::external::{GoogleBooksClient, JikanClient};
use shiori::modules::provider::traits::MediaProviderClient;
use shiori::shared::utils::RateLimiter;
use shiori::{DetailService, MediaKind, MediaSummary};
use std::sync::Arc;

fn service_for(server: &ServerGuard) -> DetailService {
    let jikan: Arc<dyn MediaProviderClient> = Arc::new(
        JikanClient::with_config(server.url(), Arc::new(RateLimiter::unthrottled())).unwrap(),
    );
    let books: Arc<dyn MediaProviderClient> =
        Arc::new(GoogleBooksClient::with_base_url(server.url()).unwrap());
    DetailService::with_clients(vec![jikan, books])
}

fn summary(id: &str, kind: MediaKind) -> MediaSummary {
    MediaSummary {
        id: id.to_string(),
        title: "Some Title".to_string(),
        kind,
        format: "Manga".to_string(),
        synopsis: "No synopsis available.".to_string(),
        total_units: None,
        cover_url: None,
        genres: Vec::new(),
    }
}

#[tokio::test]
async fn manga_items_route_to_jikan_manga_endpoints() {
    let mut server = mockito::Server::new_async().await;

    let full_mock = server
        .mock("GET", "/manga/11/full")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": {
                    "mal_id": 11,
                    "title": "Berserk",
                    "type": "Manga",
                    "relations": [
                        {"relation": "Adaptation", "entry": [{"mal_id": 33, "name": "Berserk (1997)"}]}
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let characters_mock = server
        .mock("GET", "/manga/11/characters")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": []}).to_string())
        .create_async()
        .await;

    let service = service_for(&server);
    let base = summary("mal-11", MediaKind::Manga);
    let details = service.enrich(&base).await;

    full_mock.assert_async().await;
    characters_mock.assert_async().await;

    assert_eq!(details.summary, base);
    assert_eq!(details.relations.len(), 1);
    // Trailers are an anime-only field
    assert!(details.trailer_url.is_none());
}

#[tokio::test]
async fn book_items_route_to_volume_endpoint() {
    let mut server = mockito::Server::new_async().await;

    let volume_mock = server
        .mock("GET", "/volumes/abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "abc",
                "volumeInfo": {
                    "title": "Some Title",
                    "imageLinks": {"thumbnail": "http://books.google.com/big"}
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = service_for(&server);
    let base = summary("gb-abc", MediaKind::Book);
    let details = service.enrich(&base).await;

    volume_mock.assert_async().await;
    assert_eq!(
        details.summary.cover_url.as_deref(),
        Some("https://books.google.com/big")
    );
    assert!(details.relations.is_empty());
    assert!(details.characters.is_empty());
}

#[tokio::test]
async fn unknown_prefix_passes_base_record_through() {
    let server = mockito::Server::new_async().await;

    let service = service_for(&server);
    let base = summary("tmdb-55", MediaKind::Anime);
    let details = service.enrich(&base).await;

    assert_eq!(details.summary, base);
    assert!(details.relations.is_empty());
    assert!(details.trailer_url.is_none());
    assert!(details.characters.is_empty());
}

#[tokio::test]
async fn enrichment_is_total_when_every_sub_request_fails() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/anime/20/full")
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/anime/20/characters")
        .with_status(500)
        .create_async()
        .await;

    let service = service_for(&server);
    let base = summary("mal-20", MediaKind::Anime);
    let details = service.enrich(&base).await;

    assert_eq!(details.summary, base);
    assert!(details.relations.is_empty());
    assert!(details.trailer_url.is_none());
    assert!(details.characters.is_empty());
}
