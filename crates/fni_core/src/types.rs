use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned article identifier. The backend currently sends integers,
/// but the client treats the value as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Int(id) => write!(f, "{}", id),
            ArticleId::Text(id) => f.write_str(id),
        }
    }
}

impl FromStr for ArticleId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(id) => ArticleId::Int(id),
            Err(_) => ArticleId::Text(s.trim().to_string()),
        })
    }
}

macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $(
                #[value(name = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value sent to and received from the Articles API.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Human readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {}", $what, other)),
                }
            }
        }
    };
}

tag_enum! {
    /// Market segment an article is about.
    AssetClass, "asset class" {
        Equity => ("equity", "Equity"),
        Fx => ("fx", "FX / Currencies"),
        Crypto => ("crypto", "Crypto"),
        Commodities => ("commodities", "Commodities"),
        Macro => ("macro", "Macro / Rates"),
        Other => ("other", "Other"),
    }
}

tag_enum! {
    /// Market direction an article implies.
    Sentiment, "sentiment" {
        Bullish => ("bullish", "Bullish"),
        Bearish => ("bearish", "Bearish"),
        Neutral => ("neutral", "Neutral"),
    }
}

/// A stored article as returned by `GET /articles/`.
///
/// Never mutated by the client: reloads replace the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub source: Option<String>,
    pub content: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_tag")]
    pub asset_class: Option<AssetClass>,
    #[serde(default, deserialize_with = "lenient_tag")]
    pub sentiment: Option<Sentiment>,
}

/// Response envelope of `GET /articles/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub articles: Vec<Article>,
}

/// Body of `POST /articles/`.
///
/// The tag fields go out as empty strings when nothing is selected, which is
/// what the backend stores for an untagged article.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub source: String,
    pub content: String,
    pub asset_class: String,
    pub sentiment: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

fn lenient_tag<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };
    match raw.trim().parse::<T>() {
        Ok(tag) => Ok(Some(tag)),
        Err(e) => {
            tracing::debug!("Ignoring article tag: {}", e);
            Ok(None)
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Article>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Article>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_from_backend_payload() {
        let payload = json!({
            "id": 7,
            "title": "Fed Cuts Rates",
            "source": "",
            "summary": "",
            "content": "The Fed cut rates.",
            "asset_class": "",
            "sentiment": "bullish",
            "created_at": "2025-01-02 10:30"
        });

        let article: Article = serde_json::from_value(payload).unwrap();
        assert_eq!(article.id, ArticleId::Int(7));
        assert_eq!(article.source, None);
        assert_eq!(article.summary, None);
        assert_eq!(article.asset_class, None);
        assert_eq!(article.sentiment, Some(Sentiment::Bullish));
        assert_eq!(article.created_at, "2025-01-02 10:30");
    }

    #[test]
    fn test_article_tolerates_missing_and_unknown_fields() {
        let payload = json!({
            "id": "abc",
            "title": "Oil prices drop",
            "content": "OPEC met.",
            "asset_class": "real-estate"
        });

        let article: Article = serde_json::from_value(payload).unwrap();
        assert_eq!(article.id, ArticleId::Text("abc".to_string()));
        assert_eq!(article.asset_class, None);
        assert_eq!(article.sentiment, None);
        assert!(article.created_at.is_empty());
    }

    #[test]
    fn test_article_list_missing_field_is_empty() {
        let list: ArticleList = serde_json::from_str("{}").unwrap();
        assert!(list.articles.is_empty());

        let list: ArticleList = serde_json::from_str(r#"{"articles": null}"#).unwrap();
        assert!(list.articles.is_empty());
    }

    #[test]
    fn test_tags_round_trip_through_wire_values() {
        for tag in AssetClass::ALL {
            assert_eq!(tag.as_str().parse::<AssetClass>().unwrap(), *tag);
        }
        assert_eq!(AssetClass::Fx.label(), "FX / Currencies");
        assert_eq!(Sentiment::Neutral.to_string(), "neutral");
        assert!("sideways".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_new_article_serializes_blank_tags() {
        let body = serde_json::to_value(NewArticle {
            title: "t".to_string(),
            content: "c".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body["asset_class"], "");
        assert_eq!(body["sentiment"], "");
        assert_eq!(body["source"], "");
    }

    #[test]
    fn test_article_id_parse() {
        assert_eq!("42".parse::<ArticleId>().unwrap(), ArticleId::Int(42));
        assert_eq!("x-1".parse::<ArticleId>().unwrap(), ArticleId::Text("x-1".to_string()));
    }
}
