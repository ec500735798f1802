pub mod http;
pub mod memory;

pub use http::HttpArticles;
pub use memory::{ApiCall, MemoryArticles};
