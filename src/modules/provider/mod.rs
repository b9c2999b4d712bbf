pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use domain::MediaProvider;
pub use infrastructure::service::{DetailService, SearchSequencer, SearchService};
