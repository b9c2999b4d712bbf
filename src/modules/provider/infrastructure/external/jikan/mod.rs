mod client;
pub mod dto;
mod mapper;

pub use client::JikanClient;
pub use mapper::JikanMapper;
