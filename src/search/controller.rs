use std::sync::Arc;

use log::debug;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use super::state::{Completion, SearchRequest, SearchState, SearchView};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::Book;
use crate::stage::{self, Stage};

const SAMPLE: &str = "sample";

enum Fetched {
    Sample(anyhow::Result<Vec<Book>>),
    Search {
        generation: u64,
        result: anyhow::Result<Vec<Book>>,
    },
}

/// Front end of a running [`SearchController`].
pub struct SearchHandle {
    edits: mpsc::Sender<String>,
    view: watch::Receiver<SearchView>,
    task: JoinHandle<()>,
}

impl SearchHandle {
    /// Replaces the raw query text, as if the user typed it.
    pub async fn set_query(&self, query: impl Into<String>) -> anyhow::Result<()> {
        self.edits
            .send(query.into())
            .await
            .map_err(|_| anyhow::Error::msg("search controller stopped"))
    }

    pub fn view(&self) -> SearchView {
        self.view.borrow().clone()
    }

    /// Waits for the next view change and returns it.
    pub async fn changed(&mut self) -> anyhow::Result<SearchView> {
        self.view.changed().await?;

        Ok(self.view.borrow_and_update().clone())
    }

    pub async fn shutdown(self) {
        drop(self.edits);
        let _ = self.task.await;
    }
}

/// Debounces query edits and keeps stale responses off the screen.
///
/// Runs as a single task: edits, the debounce timer and fetch completions
/// are handled one at a time. Fetches themselves run on their own tasks and
/// are never cancelled; their results are dropped once superseded.
pub struct SearchController<C> {
    catalog: Arc<C>,
    config: Config,
    state: SearchState,
}

impl<C> SearchController<C>
where
    C: Catalog + 'static,
{
    pub fn new(catalog: Arc<C>, config: Config) -> SearchController<C> {
        let state = SearchState::new(config.placeholder_count);

        SearchController {
            catalog,
            config,
            state,
        }
    }

    pub fn spawn(mut self) -> SearchHandle {
        let (edit_tx, edit_rx) = mpsc::channel(32);

        self.state.begin_sample();
        let (view_tx, view_rx) = watch::channel(self.state.view());

        let task = tokio::spawn(self.run(edit_rx, view_tx));

        SearchHandle {
            edits: edit_tx,
            view: view_rx,
            task,
        }
    }

    async fn run(mut self, mut edits: mpsc::Receiver<String>, view: watch::Sender<SearchView>) {
        let (done_tx, mut done_rx) = mpsc::unbounded_channel();

        self.issue_sample(&done_tx);

        let timer = time::sleep(self.config.debounce);
        tokio::pin!(timer);
        let mut armed = false;

        loop {
            tokio::select! {
                edit = edits.recv() => {
                    let query = match edit {
                        Some(query) => query,
                        None => break,
                    };

                    if let Some(generation) = self.state.edit(query) {
                        stage::update(generation, Stage::Edited);

                        armed = !self.state.query().is_empty();
                        if armed {
                            timer.as_mut().reset(Instant::now() + self.config.debounce);
                        }
                    }
                }
                () = &mut timer, if armed => {
                    armed = false;

                    if let Some(request) = self.state.settle(self.state.generation()) {
                        self.issue_search(request, &done_tx);
                    }
                }
                Some(fetched) = done_rx.recv() => self.apply(fetched),
            }

            let next = self.state.view();
            view.send_if_modified(|current| {
                if *current == next {
                    false
                } else {
                    *current = next;
                    true
                }
            });
        }

        debug!("search controller stopped");
    }

    fn issue_sample(&self, done: &mpsc::UnboundedSender<Fetched>) {
        stage::update(SAMPLE, Stage::SampleIssued);

        let catalog = Arc::clone(&self.catalog);
        let query = self.config.sample_query.clone();
        let limit = self.config.sample_limit;
        let done = done.clone();

        tokio::spawn(async move {
            let result = catalog.search(&query, limit).await;

            if done.send(Fetched::Sample(result)).is_err() {
                debug!("sample finished after shutdown");
            }
        });
    }

    fn issue_search(&self, request: SearchRequest, done: &mpsc::UnboundedSender<Fetched>) {
        stage::update(request.generation, Stage::Issued(&request.query));

        let catalog = Arc::clone(&self.catalog);
        let limit = self.config.search_limit;
        let done = done.clone();

        tokio::spawn(async move {
            let result = catalog.search(&request.query, limit).await;
            let fetched = Fetched::Search {
                generation: request.generation,
                result,
            };

            if done.send(fetched).is_err() {
                debug!("{}: finished after shutdown", request.generation);
            }
        });
    }

    fn apply(&mut self, fetched: Fetched) {
        match fetched {
            Fetched::Sample(result) => match self.state.finish_sample(result) {
                Completion::Applied(count) => stage::update(SAMPLE, Stage::SampleLoaded(count)),
                Completion::Failed(err) => stage::update(SAMPLE, Stage::Failed(&err)),
                Completion::Stale { .. } => {}
            },
            Fetched::Search { generation, result } => {
                match self.state.complete(generation, result) {
                    Completion::Applied(count) => stage::update(generation, Stage::Loaded(count)),
                    Completion::Stale { current } => {
                        stage::update(generation, Stage::Discarded(current))
                    }
                    Completion::Failed(err) => stage::update(generation, Stage::Failed(&err)),
                }
            }
        }
    }
}
