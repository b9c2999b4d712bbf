use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct JikanListResponse {
    pub data: Vec<JikanMedia>,
}

/// Subset of the Jikan media record this engine extracts. The `/full`
/// endpoint returns the same shape plus relations.
#[derive(Debug, Clone, Deserialize)]
pub struct JikanMedia {
    pub mal_id: i64,
    pub title: String,
    pub title_english: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub synopsis: Option<String>,
    pub episodes: Option<u32>,
    pub chapters: Option<u32>,
    pub images: Option<JikanImages>,
    #[serde(default)]
    pub genres: Vec<JikanEntity>,
    pub trailer: Option<JikanTrailer>,
    #[serde(default)]
    pub relations: Vec<JikanRelation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImages {
    pub jpg: Option<JikanImageSet>,
    pub webp: Option<JikanImageSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanEntity {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanTrailer {
    pub embed_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanRelation {
    pub relation: String,
    #[serde(default)]
    pub entry: Vec<JikanRelationEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanRelationEntry {
    pub mal_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanFullResponse {
    pub data: JikanMedia,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharactersResponse {
    #[serde(default)]
    pub data: Vec<JikanCharacterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacterEntry {
    pub character: JikanCharacter,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacter {
    pub name: String,
    pub images: Option<JikanCharacterImages>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacterImages {
    pub webp: Option<JikanImageSet>,
}

// Search request parameters
#[derive(Debug, Clone, Serialize)]
pub struct JikanSearchParams {
    pub q: String,
    pub limit: u32,
    pub page: u32,
    /// Jikan excludes mature entries when `sfw=true`.
    pub sfw: bool,
}
