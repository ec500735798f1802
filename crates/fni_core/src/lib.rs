pub mod api;
pub mod error;
pub mod search;
pub mod text;
pub mod types;

pub use api::ArticlesApi;
pub use error::Error;
pub use types::{Article, ArticleId, ArticleList, AssetClass, NewArticle, Sentiment};
pub type Result<T> = std::result::Result<T, Error>;

/// Where the Articles API listens unless told otherwise.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

pub mod prelude {
    pub use crate::search::filter_articles;
    pub use crate::text::{preview, truncate};
    pub use crate::{Article, ArticleId, ArticlesApi, AssetClass, Error, NewArticle, Result, Sentiment};
}
