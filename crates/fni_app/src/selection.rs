use fni_core::{Article, ArticleId};

/// Which article, if any, has its detail panel open.
#[derive(Debug, Default)]
pub struct Selection {
    selected: Option<Article>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, article: &Article) {
        self.selected = Some(article.clone());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn current(&self) -> Option<&Article> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &ArticleId) -> bool {
        self.selected.as_ref().is_some_and(|a| &a.id == id)
    }

    /// Follows a reload: swaps in the fresh copy of the selected article, or
    /// closes the panel when its id is gone.
    pub fn reconcile(&mut self, articles: &[Article]) {
        let Some(current) = &self.selected else {
            return;
        };
        self.selected = articles.iter().find(|a| a.id == current.id).cloned();
    }
}
