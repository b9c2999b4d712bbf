mod media_details;
mod media_kind;
mod media_summary;
mod search_query;

pub use media_details::{CharacterInfo, MediaDetails, MediaRelation};
pub use media_kind::MediaKind;
pub use media_summary::MediaSummary;
pub use search_query::SearchQuery;
