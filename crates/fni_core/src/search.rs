//! Client-side search over the loaded articles.
//!
//! A plain linear scan on every keystroke. The archive is a personal one, so
//! there is no index to keep in sync.

use crate::types::Article;

/// Lower-cases the raw search box contents. Whitespace is kept as typed.
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

/// `title + " " + source + " " + summary`, lower-cased.
pub fn haystack(article: &Article) -> String {
    format!(
        "{} {} {}",
        article.title,
        article.source.as_deref().unwrap_or(""),
        article.summary.as_deref().unwrap_or(""),
    )
    .to_lowercase()
}

/// Returns true when `article` matches an already normalized term.
pub fn matches(article: &Article, normalized: &str) -> bool {
    normalized.is_empty() || haystack(article).contains(normalized)
}

/// Stable filter of `articles` by `term`. An empty term keeps everything.
pub fn filter_articles<'a>(articles: &'a [Article], term: &str) -> Vec<&'a Article> {
    let normalized = normalize_term(term);
    if normalized.is_empty() {
        return articles.iter().collect();
    }
    articles
        .iter()
        .filter(|article| matches(article, &normalized))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArticleId;
    use proptest::prelude::*;

    fn article(id: i64, title: &str, source: Option<&str>, summary: Option<&str>) -> Article {
        Article {
            id: ArticleId::Int(id),
            title: title.to_string(),
            source: source.map(str::to_string),
            content: "body".to_string(),
            summary: summary.map(str::to_string),
            created_at: "2025-01-01 09:00".to_string(),
            asset_class: None,
            sentiment: None,
        }
    }

    fn sample() -> Vec<Article> {
        vec![
            article(1, "Fed Cuts Rates", Some("Reuters"), Some("The Fed lowered its benchmark rate.")),
            article(2, "Oil prices drop", Some("Bloomberg"), Some("OPEC output rose.")),
        ]
    }

    #[test]
    fn test_search_by_source() {
        let articles = sample();
        let found = filter_articles(&articles, "reuters");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Fed Cuts Rates");
    }

    #[test]
    fn test_search_is_case_insensitive_and_spans_fields() {
        let articles = sample();
        assert_eq!(filter_articles(&articles, "OPEC").len(), 1);
        // the separator space joins title and source
        assert_eq!(filter_articles(&articles, "drop bloomberg").len(), 1);
        assert!(filter_articles(&articles, "nasdaq").is_empty());
    }

    #[test]
    fn test_search_does_not_trim() {
        let articles = sample();
        assert!(filter_articles(&articles, " ").len() == 2);
        assert!(filter_articles(&articles, "  rates").is_empty());
    }

    #[test]
    fn test_missing_source_and_summary() {
        let articles = vec![article(3, "Gold rallies", None, None)];
        assert_eq!(haystack(&articles[0]), "gold rallies  ");
        assert_eq!(filter_articles(&articles, "gold").len(), 1);
    }

    fn arb_article() -> impl Strategy<Value = Article> {
        (
            any::<i64>(),
            "[A-Za-z ]{1,20}",
            proptest::option::of("[A-Za-z]{0,10}"),
            proptest::option::of("[A-Za-z .]{0,40}"),
        )
            .prop_map(|(id, title, source, summary)| {
                article(id, &title, source.as_deref(), summary.as_deref())
            })
    }

    proptest! {
        #[test]
        fn prop_empty_term_is_identity(articles in proptest::collection::vec(arb_article(), 0..20)) {
            let found = filter_articles(&articles, "");
            prop_assert_eq!(found.len(), articles.len());
            for (kept, source_article) in found.iter().zip(articles.iter()) {
                prop_assert!(std::ptr::eq(*kept, source_article));
            }
        }

        #[test]
        fn prop_filter_partitions_by_haystack(
            articles in proptest::collection::vec(arb_article(), 0..20),
            term in "[A-Za-z ]{1,4}",
        ) {
            let found = filter_articles(&articles, &term);
            let needle = term.to_lowercase();
            let mut cursor = found.iter().peekable();
            for a in &articles {
                let hit = haystack(a).contains(&needle);
                let kept = cursor.peek().map_or(false, |k| std::ptr::eq(**k, a));
                prop_assert_eq!(hit, kept);
                if kept {
                    cursor.next();
                }
            }
            prop_assert!(cursor.next().is_none());
        }
    }
}
