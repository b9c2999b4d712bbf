use super::MediaKind;

/// Transient search input; never persisted. `kind_filter = None` means all
/// media kinds.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub kind_filter: Option<MediaKind>,
    pub page: u32,
    pub include_mature: bool,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind_filter: None,
            page: 1,
            include_mature: false,
        }
    }

    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind_filter = Some(kind);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn include_mature(mut self, include: bool) -> Self {
        self.include_mature = include;
        self
    }
}
