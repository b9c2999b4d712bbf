pub mod media;
pub mod provider;
pub mod recommendation;
