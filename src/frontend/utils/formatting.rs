use crate::common::article::Article;

/// Number of body characters shown in the list before it is cut off.
pub const BODY_EXCERPT_CHARS: usize = 200;

const NO_CONTENT: &str = "No content";

/// Start of the article body followed by an ellipsis. The ellipsis is added even when the
/// body is shorter than the limit.
pub fn body_excerpt(body: Option<&str>) -> String {
    let text: String = match body {
        Some(body) if !body.is_empty() => body.chars().take(BODY_EXCERPT_CHARS).collect(),
        _ => NO_CONTENT.to_string(),
    };
    format!("{text}...")
}

pub fn metadata_line(article: &Article) -> String {
    format!(
        "Dataset: {} | Language: {}",
        article.dataset_type, article.language
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_excerpt_truncates() {
        let body = "x".repeat(250);
        assert_eq!(format!("{}...", "x".repeat(200)), body_excerpt(Some(&body)));

        let exact = "y".repeat(200);
        assert_eq!(format!("{exact}..."), body_excerpt(Some(&exact)));

        assert_eq!("short...", body_excerpt(Some("short")));
    }

    #[test]
    fn test_body_excerpt_counts_characters() {
        let body = "é".repeat(300);
        let excerpt = body_excerpt(Some(&body));
        assert_eq!(203, excerpt.chars().count());
        assert!(excerpt.starts_with(&"é".repeat(200)));
    }

    #[test]
    fn test_body_excerpt_placeholder() {
        assert_eq!("No content...", body_excerpt(None));
        assert_eq!("No content...", body_excerpt(Some("")));
    }

    #[test]
    fn test_metadata_line() {
        let article = Article {
            dataset_type: "news".to_string(),
            language: "en".to_string(),
            ..Default::default()
        };
        assert_eq!("Dataset: news | Language: en", metadata_line(&article));
    }
}
