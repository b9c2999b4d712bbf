use serde::Deserialize;

/// Google Books omits `items` entirely when a query matches nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleBooksVolumeList {
    #[serde(default)]
    pub items: Vec<GoogleBooksVolume>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleBooksVolume {
    pub id: String,
    pub volume_info: GoogleBooksVolumeInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleBooksVolumeInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    pub image_links: Option<GoogleBooksImageLinks>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleBooksImageLinks {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
}
