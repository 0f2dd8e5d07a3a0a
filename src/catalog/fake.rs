use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{self, Instant};

use super::Catalog;
use crate::models::{Book, Description};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub query: String,
    pub limit: usize,
    pub at: Duration,
}

/// In-memory catalog that answers every query with one book titled after
/// the query, after an optional per-query delay.
pub struct FakeCatalog {
    started: Instant,
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    descriptions: HashMap<String, Description>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    pub fn new() -> FakeCatalog {
        FakeCatalog {
            started: Instant::now(),
            delays: HashMap::new(),
            failing: HashSet::new(),
            descriptions: HashMap::new(),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn failing(mut self, query: &str) -> Self {
        self.failing.insert(query.to_string());
        self
    }

    pub fn description(mut self, key: &str, description: Description) -> Self {
        self.descriptions.insert(key.to_string(), description);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn book(query: &str) -> Book {
        Book {
            title: Some(query.to_string()),
            isbn: vec![format!("isbn-{}", query)],
            ..Book::default()
        }
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn search(&self, query: &str, limit: usize) -> anyhow::Result<Vec<Book>> {
        self.calls.lock().unwrap().push(Call {
            query: query.to_string(),
            limit,
            at: self.started.elapsed(),
        });

        if let Some(delay) = self.delays.get(query) {
            time::sleep(*delay).await;
        }

        if self.failing.contains(query) {
            return Err(anyhow::Error::msg(format!("search for {:?} failed", query)));
        }

        Ok(vec![FakeCatalog::book(query)])
    }

    async fn description(&self, key: &str) -> anyhow::Result<Description> {
        match self.descriptions.get(key) {
            Some(description) => Ok(description.clone()),
            None => Err(anyhow::Error::msg(format!("no work {}", key))),
        }
    }
}
