use crate::modules::media::domain::{MediaKind, MediaSummary};
use crate::modules::provider::domain::MediaProvider;

use super::dto::{GoogleBooksImageLinks, GoogleBooksVolume};

const DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// Maps Google Books volumes to the canonical result shape.
pub struct GoogleBooksMapper;

impl GoogleBooksMapper {
    /// Volumes without a title cannot satisfy the non-empty-title contract
    /// and are skipped.
    pub fn to_summary(volume: GoogleBooksVolume) -> Option<MediaSummary> {
        let info = volume.volume_info;
        let title = info.title.filter(|t| !t.trim().is_empty())?;

        let cover_url = info
            .image_links
            .as_ref()
            .and_then(|links| links.thumbnail.clone().or_else(|| links.small_thumbnail.clone()))
            .map(|url| Self::normalize_cover_url(&url));

        Some(MediaSummary {
            id: MediaProvider::GoogleBooks.namespace(&volume.id),
            title,
            kind: MediaKind::Book,
            format: "Book".to_string(),
            synopsis: info
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
            total_units: info.page_count,
            cover_url,
            genres: info.categories,
        })
    }

    /// Detail endpoint exposes larger renditions than list search does.
    pub fn pick_detail_cover(links: &GoogleBooksImageLinks) -> Option<String> {
        links
            .thumbnail
            .clone()
            .or_else(|| links.medium.clone())
            .or_else(|| links.large.clone())
            .map(|url| Self::normalize_cover_url(&url))
    }

    /// Force secure transport and drop the `edge=curl` rendering artifact
    /// Google appends to thumbnails.
    pub fn normalize_cover_url(url: &str) -> String {
        url.replacen("http:", "https:", 1).replace("&edge=curl", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::infrastructure::external::google_books::dto::GoogleBooksVolumeInfo;

    fn volume(title: Option<&str>) -> GoogleBooksVolume {
        GoogleBooksVolume {
            id: "zyTCAlFPjgYC".to_string(),
            volume_info: GoogleBooksVolumeInfo {
                title: title.map(str::to_string),
                description: None,
                page_count: Some(320),
                image_links: Some(GoogleBooksImageLinks {
                    small_thumbnail: Some("http://books.google.com/small".to_string()),
                    thumbnail: Some(
                        "http://books.google.com/thumb?zoom=1&edge=curl&source=gbs_api".to_string(),
                    ),
                    medium: None,
                    large: None,
                }),
                categories: vec!["Fiction".to_string()],
            },
        }
    }

    #[test]
    fn maps_volume_to_book_summary() {
        let summary = GoogleBooksMapper::to_summary(volume(Some("The Hobbit"))).unwrap();
        assert_eq!(summary.id, "gb-zyTCAlFPjgYC");
        assert_eq!(summary.kind, MediaKind::Book);
        assert_eq!(summary.format, "Book");
        assert_eq!(summary.synopsis, "No description available.");
        assert_eq!(summary.total_units, Some(320));
        assert_eq!(summary.genres, vec!["Fiction"]);
    }

    #[test]
    fn normalizes_cover_to_https_and_strips_curl_artifact() {
        let summary = GoogleBooksMapper::to_summary(volume(Some("The Hobbit"))).unwrap();
        assert_eq!(
            summary.cover_url.as_deref(),
            Some("https://books.google.com/thumb?zoom=1&source=gbs_api")
        );
    }

    #[test]
    fn falls_back_to_small_thumbnail() {
        let mut v = volume(Some("The Hobbit"));
        v.volume_info.image_links.as_mut().unwrap().thumbnail = None;
        let summary = GoogleBooksMapper::to_summary(v).unwrap();
        assert_eq!(
            summary.cover_url.as_deref(),
            Some("https://books.google.com/small")
        );
    }

    #[test]
    fn skips_untitled_volumes() {
        assert!(GoogleBooksMapper::to_summary(volume(None)).is_none());
        assert!(GoogleBooksMapper::to_summary(volume(Some("  "))).is_none());
    }

    #[test]
    fn detail_cover_prefers_thumbnail_then_medium_then_large() {
        let links = GoogleBooksImageLinks {
            small_thumbnail: None,
            thumbnail: None,
            medium: Some("http://books.google.com/medium".to_string()),
            large: Some("http://books.google.com/large".to_string()),
        };
        assert_eq!(
            GoogleBooksMapper::pick_detail_cover(&links).as_deref(),
            Some("https://books.google.com/medium")
        );
    }
}
