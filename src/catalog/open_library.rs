use anyhow::Context;
use async_trait::async_trait;
use log::{debug, trace, warn};
use serde::Deserialize;
use serde_json::Value;

use super::{url, Catalog};
use crate::config::Config;
use crate::models::{Book, Description};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<Value>,
}

/// Decodes each doc on its own so one malformed record doesn't sink the page.
fn decode_docs(docs: Vec<Value>) -> Vec<Book> {
    docs.into_iter()
        .enumerate()
        .filter_map(|(index, doc)| match serde_json::from_value::<Book>(doc) {
            Ok(book) => Some(book),
            Err(err) => {
                warn!("skipping doc {}: {}", index, err);
                None
            }
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct WorkResponse {
    #[serde(default)]
    description: Description,
}

/// # Open Library client
/// Talks to the public search and works endpoints.
pub struct OpenLibrary {
    client: reqwest::Client,
    config: Config,
}

impl OpenLibrary {
    pub fn new(config: Config) -> anyhow::Result<OpenLibrary> {
        let client = reqwest::Client::builder().build()?;

        Ok(OpenLibrary { client, config })
    }
}

#[async_trait]
impl Catalog for OpenLibrary {
    async fn search(&self, query: &str, limit: usize) -> anyhow::Result<Vec<Book>> {
        trace!("OpenLibrary::search()");
        debug!("query = {:?}, limit = {}", query, limit);

        let limit = limit.to_string();

        let response = self
            .client
            .get(self.config.search_url.as_str())
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body = response
            .json::<SearchResponse>()
            .await
            .with_context(|| format!("Can't decode search response for {:?}", query))?;

        debug!("docs = {}", body.docs.len());

        Ok(decode_docs(body.docs))
    }

    async fn description(&self, key: &str) -> anyhow::Result<Description> {
        trace!("OpenLibrary::description()");
        let work_url = url::description(&self.config, key);

        let response = self
            .client
            .get(work_url.as_str())
            .send()
            .await?
            .error_for_status()?;

        let body = response
            .json::<WorkResponse>()
            .await
            .with_context(|| format!("Can't decode work {}", key))?;

        Ok(body.description)
    }
}
