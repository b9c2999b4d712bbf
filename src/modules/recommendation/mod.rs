pub mod application;
pub mod infrastructure;

pub use application::RecommendationService;
pub use infrastructure::GeminiClient;
