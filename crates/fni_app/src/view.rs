//! Render-ready projections of the store. Recomputed on every draw.

use fni_core::search::filter_articles;
use fni_core::text::preview;
use fni_core::Article;

use crate::store::ArticleStore;

pub const LOADING: &str = "Loading...";
pub const NO_MATCHES: &str = "No articles match your search. Try a different keyword.";
pub const NO_SOURCE: &str = "N/A";

pub fn source_label(article: &Article) -> &str {
    article.source.as_deref().unwrap_or(NO_SOURCE)
}

/// `Asset: equity  Sentiment: bullish`, omitting whichever tag is absent.
pub fn tag_line(article: &Article) -> String {
    let mut parts = Vec::new();
    if let Some(asset) = article.asset_class {
        parts.push(format!("Asset: {}", asset));
    }
    if let Some(sentiment) = article.sentiment {
        parts.push(format!("Sentiment: {}", sentiment));
    }
    parts.join("  ")
}

/// `Source: Reuters  Created: 2025-01-01 09:00`
pub fn meta_line(article: &Article) -> String {
    format!("Source: {}  Created: {}", source_label(article), article.created_at)
}

#[derive(Debug)]
pub struct ArticleRow<'a> {
    pub article: &'a Article,
    pub meta: String,
    pub tags: String,
    pub summary: String,
}

impl<'a> ArticleRow<'a> {
    fn new(article: &'a Article) -> Self {
        Self {
            article,
            meta: meta_line(article),
            tags: tag_line(article),
            summary: preview(article.summary.as_deref()),
        }
    }
}

/// The article list as it should appear for the current search term.
#[derive(Debug)]
pub struct ArticleListView<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub rows: Vec<ArticleRow<'a>>,
}

impl<'a> ArticleListView<'a> {
    /// Rows are withheld while a load is outstanding.
    pub fn project(store: &'a ArticleStore, term: &str) -> Self {
        let rows = if store.is_loading() {
            Vec::new()
        } else {
            filter_articles(store.articles(), term)
                .into_iter()
                .map(ArticleRow::new)
                .collect()
        };
        Self {
            loading: store.is_loading(),
            error: store.error(),
            rows,
        }
    }

    /// Status lines to show above the rows, in display order.
    pub fn notices(&self) -> Vec<&str> {
        let mut notices = Vec::new();
        if self.loading {
            notices.push(LOADING);
        }
        if let Some(error) = self.error {
            notices.push(error);
        }
        if !self.loading && self.error.is_none() && self.rows.is_empty() {
            notices.push(NO_MATCHES);
        }
        notices
    }
}

/// Expanded view of the selected article.
#[derive(Debug)]
pub struct DetailView<'a> {
    pub title: &'a str,
    pub meta: String,
    pub tags: String,
    pub summary: &'a str,
    pub content: &'a str,
}

impl<'a> DetailView<'a> {
    pub fn new(article: &'a Article) -> Self {
        Self {
            title: &article.title,
            meta: meta_line(article),
            tags: tag_line(article),
            summary: article.summary.as_deref().unwrap_or(""),
            content: &article.content,
        }
    }
}
