use serde::{Deserialize, Serialize};

use super::MediaSummary;

/// A related entry surfaced by the origin provider (sequel, adaptation, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRelation {
    pub title: String,
    pub relation_kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInfo {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A `MediaSummary` enriched with the extended fields only the detail
/// endpoints return. Base fields may be refreshed (e.g. a higher-resolution
/// cover) but the `id` is immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetails {
    #[serde(flatten)]
    pub summary: MediaSummary,
    pub relations: Vec<MediaRelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    /// Capped at 10 entries, provider billing order.
    pub characters: Vec<CharacterInfo>,
}

impl MediaDetails {
    /// Enrichment is best-effort, so every record starts as a plain copy of
    /// the summary it was requested for.
    pub fn from_summary(summary: MediaSummary) -> Self {
        Self {
            summary,
            relations: Vec::new(),
            trailer_url: None,
            characters: Vec::new(),
        }
    }
}
