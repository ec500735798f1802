use std::fmt;

use async_trait::async_trait;
use fni_core::{Article, ArticleList, ArticlesApi, Error, NewArticle, Result};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::ClientConfig;

pub struct HttpArticles {
    client: Client,
    articles_url: Url,
}

impl HttpArticles {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            articles_url: config.articles_url()?,
        })
    }

    pub fn articles_url(&self) -> &Url {
        &self.articles_url
    }
}

impl fmt::Debug for HttpArticles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpArticles")
            .field("client", &"<reqwest::Client>")
            .field("articles_url", &self.articles_url.as_str())
            .finish()
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ArticlesApi for HttpArticles {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        debug!("GET {}", self.articles_url);
        let response = self.client.get(self.articles_url.clone()).send().await?;
        let list = check_status(response).await?.json::<ArticleList>().await?;
        debug!("Received {} articles", list.articles.len());
        Ok(list.articles)
    }

    async fn create_article(&self, article: &NewArticle) -> Result<()> {
        debug!("POST {} ({})", self.articles_url, article.title);
        let response = self
            .client
            .post(self.articles_url.clone())
            .json(article)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
