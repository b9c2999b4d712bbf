mod detail_service;
mod search_sequencer;
mod search_service;

pub use detail_service::DetailService;
pub use search_sequencer::SearchSequencer;
pub use search_service::SearchService;
