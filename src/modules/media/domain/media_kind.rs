use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level media classification used for filtering and provider routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaKind {
    Anime,
    Manga,
    Manhwa,
    Book,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Anime => write!(f, "Anime"),
            MediaKind::Manga => write!(f, "Manga"),
            MediaKind::Manhwa => write!(f, "Manhwa"),
            MediaKind::Book => write!(f, "Book"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&MediaKind::Manhwa).unwrap(),
            "\"MANHWA\""
        );
        assert_eq!(
            serde_json::from_str::<MediaKind>("\"BOOK\"").unwrap(),
            MediaKind::Book
        );
    }
}
