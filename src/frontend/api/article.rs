use super::ApiClient;
use crate::{
    common::{
        article::{key_articles, Article, KeyedArticle},
        ARTICLES_ENDPOINT,
    },
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    /// Fetches the full article listing. Keys are assigned here, at ingestion, and the
    /// response order is kept.
    pub async fn list_articles(&self) -> FrontendResult<Vec<KeyedArticle>> {
        let articles: Vec<Article> = self.get(ARTICLES_ENDPOINT).await?;
        Ok(key_articles(articles))
    }
}
