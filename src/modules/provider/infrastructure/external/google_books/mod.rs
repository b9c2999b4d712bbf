mod client;
pub mod dto;
mod mapper;

pub use client::GoogleBooksClient;
pub use mapper::GoogleBooksMapper;
