pub mod external;
pub mod service;

pub use external::{GoogleBooksClient, JikanClient};
