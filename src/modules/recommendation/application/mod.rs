mod service;

pub use service::RecommendationService;
