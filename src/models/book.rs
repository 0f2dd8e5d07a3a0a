use std::fmt;

use serde::Deserialize;

use super::Description;

/// Cover identifier; the search API emits numbers, older records strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoverId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CoverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverId::Number(id) => write!(f, "{}", id),
            CoverId::Text(id) => f.write_str(id),
        }
    }
}

/// One search hit. Field completeness varies wildly between records,
/// so everything defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Book {
    pub title: Option<String>,
    pub author_name: Vec<String>,
    pub publish_date: Vec<String>,
    pub cover_i: Option<CoverId>,
    pub isbn: Vec<String>,
    pub key: Option<String>,
    pub subject: Vec<String>,
    pub language: Vec<String>,
    pub format: Vec<String>,
    pub publisher: Vec<String>,
    pub first_sentence: Vec<String>,
    pub ratings_average: Option<f64>,
    pub ratings_count: Option<u64>,
    pub description: Description,
}

impl Book {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author_name.first().map(String::as_str)
    }

    pub fn first_publish_date(&self) -> Option<&str> {
        self.publish_date.first().map(String::as_str)
    }

    /// The ISBN used when toggling the favorite state from a view.
    pub fn primary_isbn(&self) -> Option<&str> {
        self.isbn.first().map(String::as_str)
    }

    pub fn has_isbn(&self, isbn: &str) -> bool {
        self.isbn.iter().any(|own| own == isbn)
    }

    pub fn work_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }
}
