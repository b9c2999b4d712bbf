pub mod modules;
pub mod shared;

// Re-exports for easy external access - only export what the presentation layer uses
pub use modules::media::domain::{
    CharacterInfo, MediaDetails, MediaKind, MediaRelation, MediaSummary, SearchQuery,
};
pub use modules::provider::infrastructure::service::{
    DetailService, SearchSequencer, SearchService,
};
pub use modules::recommendation::RecommendationService;
pub use shared::config::EngineConfig;
