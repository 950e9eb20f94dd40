pub mod config;
pub mod error;
pub mod eventbrite;
pub mod output;
pub mod parser;
pub mod scraper;
pub mod storage;
pub mod tracing;
