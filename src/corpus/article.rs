//! Article structures.
use serde::{Deserialize, Deserializer};

/// Metadata record sitting next to each raw text file (`<id>_meta.json`).
///
/// Opaque to the annotation pipeline apart from logging; unknown fields are
/// ignored. `author` accepts both a single string and a list (the crawler
/// emitted both shapes over time).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ArticleMeta {
    pub id: usize,
    pub title: String,
    #[serde(deserialize_with = "string_or_seq")]
    pub author: Vec<String>,
    pub date: String,
    pub url: String,
}

fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrSeq {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrSeq::deserialize(deserializer)? {
        StringOrSeq::One(author) => vec![author],
        StringOrSeq::Many(authors) => authors,
    })
}

/// A raw article as discovered on disk: id, full raw text, metadata.
#[derive(Debug, Clone)]
pub struct RawArticle {
    id: usize,
    text: String,
    meta: ArticleMeta,
}

impl RawArticle {
    pub fn new(id: usize, text: String, meta: ArticleMeta) -> Self {
        RawArticle { id, text, meta }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn meta(&self) -> &ArticleMeta {
        &self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_author_list() {
        let meta_json = r#"{"id":1,"title":"Заголовок","author":["И. Иванов","П. Петров"],"date":"2023-04-01 12:00:00","url":"https://example.org/news/1"}"#;
        let meta: ArticleMeta = serde_json::from_str(meta_json).unwrap();
        assert_eq!(meta.id, 1);
        assert_eq!(meta.author.len(), 2);
    }

    #[test]
    fn deserialize_with_single_author_string() {
        let meta_json = r#"{"id":3,"title":"t","author":"NOT FOUND","date":"d","url":"u"}"#;
        let meta: ArticleMeta = serde_json::from_str(meta_json).unwrap();
        assert_eq!(meta.author, vec!["NOT FOUND".to_string()]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let meta_json =
            r#"{"id":2,"title":"t","author":[],"date":"d","url":"u","topics":["society"]}"#;
        assert!(serde_json::from_str::<ArticleMeta>(meta_json).is_ok());
    }
}
