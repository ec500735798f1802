use std::io::Write;

use anyhow::{bail, Context, Result};
use fni_app::view::{ArticleListView, DetailView};
use fni_app::{DraftField, Session};
use fni_core::{ArticleId, ArticlesApi, AssetClass, Sentiment};
use tokio::io::AsyncReadExt;
use tracing::info;

/// Values for a one-shot submission from the command line.
#[derive(Debug, Clone)]
pub struct SubmitArgs {
    pub title: String,
    pub source: String,
    pub content: String,
    pub asset_class: Option<AssetClass>,
    pub sentiment: Option<Sentiment>,
}

pub fn write_list(out: &mut impl Write, view: &ArticleListView<'_>, full: bool) -> std::io::Result<()> {
    for notice in view.notices() {
        writeln!(out, "{}", notice)?;
    }
    for row in &view.rows {
        writeln!(out, "[{}] {}", row.article.id, row.article.title)?;
        writeln!(out, "    {}", row.meta)?;
        if !row.tags.is_empty() {
            writeln!(out, "    {}", row.tags)?;
        }
        let summary = if full {
            row.article.summary.as_deref().unwrap_or("")
        } else {
            row.summary.as_str()
        };
        writeln!(out, "    Summary: {}", summary)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_detail(out: &mut impl Write, detail: &DetailView<'_>) -> std::io::Result<()> {
    writeln!(out, "{}", detail.title)?;
    writeln!(out, "{}", detail.meta)?;
    if !detail.tags.is_empty() {
        writeln!(out, "{}", detail.tags)?;
    }
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "{}", detail.summary)?;
    writeln!(out)?;
    writeln!(out, "Full Article:")?;
    writeln!(out, "{}", detail.content)?;
    Ok(())
}

pub async fn list(api: &dyn ArticlesApi, search: Option<String>, full: bool) -> Result<()> {
    let mut session = Session::new();
    session.load(api).await?;
    if let Some(term) = search {
        session.set_search(term);
    }
    let view = session.list_view();
    info!("Showing {} of {} articles", view.rows.len(), session.store.articles().len());
    write_list(&mut std::io::stdout().lock(), &view, full)?;
    Ok(())
}

pub async fn show(api: &dyn ArticlesApi, id: &str) -> Result<()> {
    let mut session = Session::new();
    session.load(api).await?;
    let id: ArticleId = id.parse()?;
    let Some(article) = session.store.find(&id).cloned() else {
        bail!("No article with id {}", id);
    };
    session.select(&article);
    if let Some(detail) = session.detail_view() {
        write_detail(&mut std::io::stdout().lock(), &detail)?;
    }
    Ok(())
}

/// `-` reads the article body from stdin so long texts can be piped in.
async fn resolve_content(content: String) -> Result<String> {
    if content != "-" {
        return Ok(content);
    }
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("Failed to read article content from stdin")?;
    Ok(buf)
}

pub async fn submit(api: &dyn ArticlesApi, args: SubmitArgs) -> Result<()> {
    let mut session = Session::new();
    let content = resolve_content(args.content).await?;
    session.form.update_field(DraftField::Title, args.title);
    session.form.update_field(DraftField::Source, args.source);
    session.form.update_field(DraftField::Content, content);
    session.form.set_asset_class(args.asset_class);
    session.form.set_sentiment(args.sentiment);

    session.submit(api).await?;
    if let Some(error) = session.store.error() {
        println!("Article submitted, but the list could not be refreshed: {}", error);
    } else {
        println!("Article submitted. {} articles stored.", session.store.articles().len());
    }
    Ok(())
}
