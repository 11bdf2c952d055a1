pub mod config;
pub mod upstream;
pub mod fetcher;
pub mod snapshot;
pub mod scheduler;
pub mod http;
pub mod app;
mod utils;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
