pub mod google_books;
pub mod http;
pub mod jikan;

pub use google_books::GoogleBooksClient;
pub use http::HttpHandler;
pub use jikan::JikanClient;
