use crate::modules::media::domain::{CharacterInfo, MediaKind, MediaRelation, MediaSummary};
use crate::modules::provider::domain::MediaProvider;

use super::dto::{JikanCharacterEntry, JikanImages, JikanMedia, JikanRelation};

const SYNOPSIS_PLACEHOLDER: &str = "No synopsis available.";
const CHARACTER_LIMIT: usize = 10;

/// Maps Jikan (MyAnimeList) payloads to the canonical result shape.
pub struct JikanMapper;

impl JikanMapper {
    /// Classify a native MAL "type" string into a media kind. Print-serial
    /// subtypes map to manga/manhwa; everything else is anime.
    pub fn classify_kind(media_type: Option<&str>) -> MediaKind {
        let lower = media_type.unwrap_or_default().to_lowercase();
        match lower.as_str() {
            "manhwa" => MediaKind::Manhwa,
            "manga" | "novel" | "light novel" | "oneshot" => MediaKind::Manga,
            _ => MediaKind::Anime,
        }
    }

    /// Map a list or full record to a summary. `force_kind` overrides the
    /// lexically inferred kind when the caller already knows what it asked
    /// the endpoint for.
    pub fn to_summary(item: JikanMedia, force_kind: Option<MediaKind>) -> MediaSummary {
        let kind =
            force_kind.unwrap_or_else(|| Self::classify_kind(item.media_type.as_deref()));

        MediaSummary {
            id: MediaProvider::Jikan.namespace(&item.mal_id.to_string()),
            title: item.title_english.filter(|t| !t.is_empty()).unwrap_or(item.title),
            kind,
            format: item.media_type.unwrap_or_else(|| "Unknown".to_string()),
            synopsis: item
                .synopsis
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| SYNOPSIS_PLACEHOLDER.to_string()),
            total_units: item.episodes.or(item.chapters),
            cover_url: item.images.as_ref().and_then(Self::pick_cover),
            genres: item.genres.into_iter().map(|g| g.name).collect(),
        }
    }

    /// Prefer WebP large > JPG large > WebP default > JPG default.
    pub fn pick_cover(images: &JikanImages) -> Option<String> {
        let webp = images.webp.as_ref();
        let jpg = images.jpg.as_ref();

        webp.and_then(|set| set.large_image_url.clone())
            .or_else(|| jpg.and_then(|set| set.large_image_url.clone()))
            .or_else(|| webp.and_then(|set| set.image_url.clone()))
            .or_else(|| jpg.and_then(|set| set.image_url.clone()))
    }

    /// Relations with no linked entry carry nothing displayable and are dropped.
    pub fn to_relations(relations: Vec<JikanRelation>) -> Vec<MediaRelation> {
        relations
            .into_iter()
            .filter_map(|relation| {
                let entry = relation.entry.into_iter().next()?;
                Some(MediaRelation {
                    title: entry.name,
                    relation_kind: relation.relation,
                    id: Some(MediaProvider::Jikan.namespace(&entry.mal_id.to_string())),
                })
            })
            .collect()
    }

    pub fn to_characters(entries: Vec<JikanCharacterEntry>) -> Vec<CharacterInfo> {
        entries
            .into_iter()
            .take(CHARACTER_LIMIT)
            .map(|entry| CharacterInfo {
                name: entry.character.name,
                role: entry.role,
                image_url: entry
                    .character
                    .images
                    .and_then(|images| images.webp)
                    .and_then(|set| set.image_url),
            })
            .collect()
    }
}
