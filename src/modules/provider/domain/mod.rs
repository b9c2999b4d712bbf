use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed page size for every provider list call, so "page N" means the same
/// thing for each underlying source.
pub const RESULTS_PER_PAGE: u32 = 15;

/// Closed set of external metadata providers. The namespace prefix embedded
/// in every canonical id routes detail enrichment back to the origin
/// provider, since the media kind alone cannot (manga and manhwa are always
/// Jikan-origin here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaProvider {
    Jikan,
    GoogleBooks,
}

impl MediaProvider {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            MediaProvider::Jikan => "mal",
            MediaProvider::GoogleBooks => "gb",
        }
    }

    /// Build a canonical id from a provider-native id.
    pub fn namespace(&self, native_id: &str) -> String {
        format!("{}-{}", self.id_prefix(), native_id)
    }

    /// Recover the origin provider from a canonical id.
    pub fn from_canonical_id(id: &str) -> Option<MediaProvider> {
        if id.starts_with("mal-") {
            Some(MediaProvider::Jikan)
        } else if id.starts_with("gb-") {
            Some(MediaProvider::GoogleBooks)
        } else {
            None
        }
    }

    /// Strip this provider's namespace prefix, returning the native id.
    pub fn native_id<'a>(&self, canonical_id: &'a str) -> Option<&'a str> {
        canonical_id.strip_prefix(&format!("{}-", self.id_prefix()))
    }
}

impl fmt::Display for MediaProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaProvider::Jikan => write!(f, "Jikan"),
            MediaProvider::GoogleBooks => write!(f, "Google Books"),
        }
    }
}
