use fni_core::{Article, ArticlesApi};

use crate::error::{LoadError, SubmitError};
use crate::form::ArticleFormController;
use crate::selection::Selection;
use crate::store::ArticleStore;
use crate::view::{ArticleListView, DetailView};

/// Everything one client window holds: the loaded articles, the draft, the
/// search box and the open detail panel.
#[derive(Debug, Default)]
pub struct Session {
    pub store: ArticleStore,
    pub form: ArticleFormController,
    pub selection: Selection,
    search: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn list_view(&self) -> ArticleListView<'_> {
        ArticleListView::project(&self.store, &self.search)
    }

    pub fn detail_view(&self) -> Option<DetailView<'_>> {
        self.selection.current().map(DetailView::new)
    }

    pub fn select(&mut self, article: &Article) {
        self.selection.select(article);
    }

    /// Applies a finished read and keeps the selection in step with it.
    pub fn apply_load(&mut self, result: fni_core::Result<Vec<Article>>) -> Result<usize, LoadError> {
        let loaded = self.store.finish_load(result);
        if loaded.is_ok() {
            self.selection.reconcile(self.store.articles());
        }
        loaded
    }

    /// Applies a finished create call. On success the draft is cleared and
    /// the follow-up reload is marked outstanding; the submission stays open
    /// until [`Session::apply_reload`].
    pub fn apply_created(&mut self, created: fni_core::Result<()>) -> Result<(), SubmitError> {
        let outcome = self.form.finish_create(created);
        if outcome.is_ok() {
            self.store.begin_load();
        }
        outcome
    }

    /// Applies the reload that followed a successful create and ends the
    /// submission.
    pub fn apply_reload(&mut self, result: fni_core::Result<Vec<Article>>) -> Result<usize, LoadError> {
        let loaded = self.apply_load(result);
        self.form.finish_submit();
        loaded
    }

    pub async fn load(&mut self, api: &dyn ArticlesApi) -> Result<usize, LoadError> {
        self.store.begin_load();
        let result = api.list_articles().await;
        self.apply_load(result)
    }

    pub async fn submit(&mut self, api: &dyn ArticlesApi) -> Result<(), SubmitError> {
        let outcome = self.form.submit(api, &mut self.store).await;
        if outcome.is_ok() && self.store.error().is_none() {
            self.selection.reconcile(self.store.articles());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::DraftField;
    use fni_core::ArticleId;
    use fni_storage::{ApiCall, MemoryArticles};

    fn article(id: i64, title: &str) -> Article {
        Article {
            id: ArticleId::Int(id),
            title: title.to_string(),
            source: Some("Bloomberg".to_string()),
            content: "Body".to_string(),
            summary: Some("Summary".to_string()),
            created_at: "2025-01-01 09:00".to_string(),
            asset_class: None,
            sentiment: None,
        }
    }

    #[tokio::test]
    async fn test_reload_clears_vanished_selection() {
        let api = MemoryArticles::with_articles(vec![article(1, "A"), article(2, "B")]);
        let mut session = Session::new();
        session.load(&api).await.unwrap();

        let first = session.store.articles()[0].clone();
        session.select(&first);
        assert_eq!(session.detail_view().unwrap().title, "A");

        api.set_articles(vec![article(2, "B")]).await;
        session.load(&api).await.unwrap();
        assert!(session.detail_view().is_none());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_selection() {
        let api = MemoryArticles::with_articles(vec![article(1, "A")]);
        let mut session = Session::new();
        session.load(&api).await.unwrap();
        let first = session.store.articles()[0].clone();
        session.select(&first);

        api.fail_lists(1).await;
        session.load(&api).await.unwrap_err();
        assert!(session.detail_view().is_some());
        assert_eq!(session.list_view().rows.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_then_search() {
        let api = MemoryArticles::with_articles(vec![article(1, "Oil prices drop")]);
        let mut session = Session::new();
        session.load(&api).await.unwrap();

        session.form.update_field(DraftField::Title, "Fed Cuts Rates");
        session.form.update_field(DraftField::Source, "Reuters");
        session.form.update_field(DraftField::Content, "The Fed cut rates.");
        session.submit(&api).await.unwrap();

        assert_eq!(
            api.calls().await.iter().filter(|c| **c == ApiCall::List).count(),
            2
        );
        assert_eq!(session.list_view().rows.len(), 2);

        session.set_search("REUTERS");
        let view = session.list_view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].article.title, "Fed Cuts Rates");
    }

    #[test]
    fn test_created_then_reload_flags() {
        let mut session = Session::new();
        session.form.update_field(DraftField::Title, "T");
        session.form.update_field(DraftField::Content, "C");
        session.form.begin_submit().unwrap();

        session.apply_created(Ok(())).unwrap();
        assert!(session.form.is_submitting());
        assert!(session.form.draft().is_empty());
        assert!(session.store.is_loading());

        session.apply_reload(Ok(vec![article(9, "T")])).unwrap();
        assert!(!session.form.is_submitting());
        assert!(!session.store.is_loading());
        assert_eq!(session.store.articles().len(), 1);
    }

    #[test]
    fn test_failed_create_skips_reload() {
        let mut session = Session::new();
        session.form.update_field(DraftField::Title, "T");
        session.form.update_field(DraftField::Content, "C");
        session.form.begin_submit().unwrap();

        session
            .apply_created(Err(fni_core::Error::Storage("down".to_string())))
            .unwrap_err();
        assert!(!session.form.is_submitting());
        assert!(!session.store.is_loading());
        assert_eq!(session.form.draft().title, "T");
    }
}
