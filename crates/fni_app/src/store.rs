use fni_core::{Article, ArticleId, ArticlesApi};
use tracing::{error, info};

use crate::error::{LoadError, LOAD_FAILED};

/// The articles last fetched from the Articles API, plus load status.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
    loading: bool,
    error: Option<String>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, in server order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn find(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| &a.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing message of the last failed load, until a load succeeds.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks a read as outstanding. Pair with [`ArticleStore::finish_load`].
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Applies the outcome of a read.
    ///
    /// Success replaces the whole list and clears the error. Failure keeps
    /// the previous list on screen.
    pub fn finish_load(&mut self, result: fni_core::Result<Vec<Article>>) -> Result<usize, LoadError> {
        self.loading = false;
        match result {
            Ok(articles) => {
                info!("Loaded {} articles", articles.len());
                self.articles = articles;
                self.error = None;
                Ok(self.articles.len())
            }
            Err(e) => {
                error!("Loading articles failed: {}", e);
                self.error = Some(LOAD_FAILED.to_string());
                Err(LoadError(e))
            }
        }
    }

    /// One best-effort read: no retry, no timeout.
    pub async fn load(&mut self, api: &dyn ArticlesApi) -> Result<usize, LoadError> {
        self.begin_load();
        let result = api.list_articles().await;
        self.finish_load(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fni_storage::{ApiCall, MemoryArticles};

    fn article(id: i64, title: &str) -> Article {
        Article {
            id: ArticleId::Int(id),
            title: title.to_string(),
            source: Some("Reuters".to_string()),
            content: "Body".to_string(),
            summary: None,
            created_at: "2025-01-01 09:00".to_string(),
            asset_class: None,
            sentiment: None,
        }
    }

    #[tokio::test]
    async fn test_load_replaces_list() {
        let api = MemoryArticles::with_articles(vec![article(2, "B"), article(1, "A")]);
        let mut store = ArticleStore::new();

        assert_eq!(store.load(&api).await.unwrap(), 2);
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
        // server order is kept
        assert_eq!(store.articles()[0].title, "B");
        assert_eq!(store.find(&ArticleId::Int(1)).unwrap().title, "A");
        assert_eq!(api.calls().await, vec![ApiCall::List]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_list() {
        let api = MemoryArticles::with_articles(vec![article(1, "A")]);
        let mut store = ArticleStore::new();
        store.load(&api).await.unwrap();

        api.set_articles(vec![article(1, "A"), article(2, "B")]).await;
        api.fail_lists(1).await;
        assert!(store.load(&api).await.is_err());
        assert!(!store.is_loading());
        assert_eq!(store.error(), Some(LOAD_FAILED));
        assert_eq!(store.articles().len(), 1);

        store.load(&api).await.unwrap();
        assert_eq!(store.error(), None);
        assert_eq!(store.articles().len(), 2);
    }

    #[test]
    fn test_loading_flag_spans_request() {
        let mut store = ArticleStore::new();
        store.begin_load();
        assert!(store.is_loading());
        store.finish_load(Ok(vec![])).unwrap();
        assert!(!store.is_loading());
        assert!(store.articles().is_empty());
    }
}
