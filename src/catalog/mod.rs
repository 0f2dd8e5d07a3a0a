use async_trait::async_trait;

use crate::models::{Book, Description};

#[cfg(test)]
pub(crate) mod fake;
mod open_library;
pub mod url;

pub use open_library::OpenLibrary;

/// Remote source of books and work descriptions.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn search(&self, query: &str, limit: usize) -> anyhow::Result<Vec<Book>>;

    /// `key` is a work path such as `/works/OL45883W`.
    async fn description(&self, key: &str) -> anyhow::Result<Description>;
}
