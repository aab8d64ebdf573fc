use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use uuid::Uuid;

/// A single record from the article listing endpoint.
///
/// The source documents every field as optional, missing text fields are read as empty.
/// Both a missing and a `null` body mean there is no body.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub dataset_type: String,
    #[serde(default)]
    pub language: String,
}

/// Stable identity of an article, derived from its content because the source has no id.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ArticleKey(pub Uuid);

impl ArticleKey {
    /// `occurrence` is zero for the first copy of an article within a response, and counts up
    /// for identical copies after it.
    pub fn new(article: &Article, occurrence: u32) -> Self {
        let mut sha256 = Sha256::new();
        for field in [
            Some(&article.title),
            article.body.as_ref(),
            Some(&article.url),
            Some(&article.dataset_type),
            Some(&article.language),
        ] {
            match field {
                Some(field) => {
                    sha256.update([1u8]);
                    sha256.update((field.len() as u64).to_le_bytes());
                    sha256.update(field);
                }
                None => sha256.update([0u8]),
            }
        }
        if occurrence > 0 {
            sha256.update(occurrence.to_le_bytes());
        }
        let hash_bytes = sha256.finalize();
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&hash_bytes.as_slice()[..16]);
        ArticleKey(Uuid::from_bytes(bytes))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyedArticle {
    pub key: ArticleKey,
    pub article: Article,
}

/// Assigns keys in response order. Keys are unique within the returned list.
pub fn key_articles(articles: Vec<Article>) -> Vec<KeyedArticle> {
    let mut seen: HashMap<ArticleKey, u32> = HashMap::new();
    articles
        .into_iter()
        .map(|article| {
            let first = ArticleKey::new(&article, 0);
            let occurrence = seen.entry(first).or_insert(0);
            let key = if *occurrence == 0 {
                first
            } else {
                ArticleKey::new(&article, *occurrence)
            };
            *occurrence += 1;
            KeyedArticle { key, article }
        })
        .collect()
}
