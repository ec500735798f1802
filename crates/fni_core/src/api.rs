use async_trait::async_trait;
use crate::types::{Article, NewArticle};
use crate::Result;

/// The two calls the client makes against the Articles API.
#[async_trait]
pub trait ArticlesApi: Send + Sync {
    /// Short backend name for log lines
    fn name(&self) -> &str;

    /// Fetch every stored article, in server order
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Store a new article. Any 2xx answer counts as success.
    async fn create_article(&self, article: &NewArticle) -> Result<()>;
}
