pub mod article;

/// Default base URL of the article source, used when nothing else is configured.
pub const DEFAULT_ARTICLE_SOURCE: &str = "http://127.0.0.1:5000";

/// Path of the article listing endpoint, relative to the article source.
pub const ARTICLES_ENDPOINT: &str = "/api/articles/";
