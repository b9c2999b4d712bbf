use serde::{Deserialize, Serialize};

use super::MediaKind;

/// Normalized, provider-agnostic search result. Instances are immutable
/// value objects built fresh per search call; `id` carries the provider
/// namespace prefix (`"mal-..."`, `"gb-..."`) and is the sole dedup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    pub id: String,
    pub title: String,
    pub kind: MediaKind,
    /// Free-text provider subtype, e.g. "TV", "Novel", "Book".
    pub format: String,
    pub synopsis: String,
    /// Episode/chapter/page count; `None` means unknown or ongoing.
    pub total_units: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Order reflects provider response order.
    pub genres: Vec<String>,
}
