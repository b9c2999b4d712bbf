pub mod domain;

pub use domain::{CharacterInfo, MediaDetails, MediaKind, MediaRelation, MediaSummary, SearchQuery};
