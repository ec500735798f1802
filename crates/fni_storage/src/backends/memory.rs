use async_trait::async_trait;
use chrono::Local;
use fni_core::{Article, ArticleId, ArticlesApi, Error, NewArticle, Result};
use tokio::sync::RwLock;

/// One call observed by [`MemoryArticles`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(NewArticle),
}

#[derive(Debug, Default)]
struct MemoryStore {
    articles: Vec<Article>,
    next_id: i64,
    calls: Vec<ApiCall>,
    fail_lists: usize,
    fail_creates: usize,
}

impl MemoryStore {
    fn insert(&mut self, article: &NewArticle) -> Result<()> {
        let title = article.title.trim();
        let content = article.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(Error::Status {
                status: 400,
                body: r#"{"error": "title and content are required"}"#.to_string(),
            });
        }

        self.next_id += 1;
        let stored = Article {
            id: ArticleId::Int(self.next_id),
            title: title.to_string(),
            source: Some(article.source.trim().to_string()).filter(|s| !s.is_empty()),
            content: content.to_string(),
            summary: None,
            created_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            asset_class: article.asset_class.trim().parse().ok(),
            sentiment: article.sentiment.trim().parse().ok(),
        };
        // newest first, like the backend's listing
        self.articles.insert(0, stored);
        Ok(())
    }
}

/// In-process Articles API.
///
/// Backs `--offline` runs and doubles as a recording fake in tests: every
/// call is logged, and list/create failures can be queued up front.
#[derive(Debug, Default)]
pub struct MemoryArticles {
    store: RwLock<MemoryStore>,
}

impl MemoryArticles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `articles` already stored, in the given order.
    pub fn with_articles(articles: Vec<Article>) -> Self {
        let next_id = articles
            .iter()
            .filter_map(|a| match a.id {
                ArticleId::Int(id) => Some(id),
                ArticleId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            store: RwLock::new(MemoryStore {
                articles,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// The next `count` list calls fail.
    pub async fn fail_lists(&self, count: usize) {
        self.store.write().await.fail_lists = count;
    }

    /// The next `count` create calls fail.
    pub async fn fail_creates(&self, count: usize) {
        self.store.write().await.fail_creates = count;
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.store.read().await.calls.clone()
    }

    pub async fn articles(&self) -> Vec<Article> {
        self.store.read().await.articles.clone()
    }

    /// Replaces the stored articles without going through `create_article`.
    pub async fn set_articles(&self, articles: Vec<Article>) {
        self.store.write().await.articles = articles;
    }
}

#[async_trait]
impl ArticlesApi for MemoryArticles {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        let mut store = self.store.write().await;
        store.calls.push(ApiCall::List);
        if store.fail_lists > 0 {
            store.fail_lists -= 1;
            return Err(Error::Storage("memory backend: list unavailable".to_string()));
        }
        Ok(store.articles.clone())
    }

    async fn create_article(&self, article: &NewArticle) -> Result<()> {
        let mut store = self.store.write().await;
        store.calls.push(ApiCall::Create(article.clone()));
        if store.fail_creates > 0 {
            store.fail_creates -= 1;
            return Err(Error::Storage("memory backend: create unavailable".to_string()));
        }
        store.insert(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fni_core::{AssetClass, Sentiment};

    fn new_article(title: &str) -> NewArticle {
        NewArticle {
            title: title.to_string(),
            source: "  Reuters ".to_string(),
            content: "Stocks rose.".to_string(),
            asset_class: "equity".to_string(),
            sentiment: String::new(),
        }
    }

    #[tokio::test]
    async fn test_memory_articles() {
        let api = MemoryArticles::new();
        api.create_article(&new_article("First")).await.unwrap();
        api.create_article(&new_article("Second")).await.unwrap();

        let articles = api.list_articles().await.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Second");
        assert_eq!(articles[0].id, ArticleId::Int(2));
        assert_eq!(articles[0].source.as_deref(), Some("Reuters"));
        assert_eq!(articles[0].asset_class, Some(AssetClass::Equity));
        assert_eq!(articles[0].sentiment, None::<Sentiment>);
        assert_eq!(api.calls().await.len(), 3);
    }

    #[tokio::test]
    async fn test_memory_rejects_blank_fields() {
        let api = MemoryArticles::new();
        let err = api.create_article(&new_article("   ")).await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 400, .. }));
        assert!(api.articles().await.is_empty());
    }

    #[tokio::test]
    async fn test_memory_queued_failures() {
        let api = MemoryArticles::new();
        api.fail_lists(1).await;
        assert!(api.list_articles().await.is_err());
        assert!(api.list_articles().await.is_ok());

        api.fail_creates(1).await;
        assert!(api.create_article(&new_article("x")).await.is_err());
        assert!(api.articles().await.is_empty());
    }
}
