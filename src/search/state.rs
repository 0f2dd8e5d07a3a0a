use crate::models::Book;

/// What the result area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    /// Nothing typed yet: the default sample list.
    Sample(Vec<Book>),
    /// A fetch for the visible state is outstanding.
    Loading { placeholders: usize },
    Results { query: String, books: Vec<Book> },
}

impl SearchView {
    pub fn books(&self) -> &[Book] {
        match self {
            SearchView::Sample(books) | SearchView::Results { books, .. } => books,
            SearchView::Loading { .. } => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchView::Loading { .. })
    }
}

/// A settled query ready to go out, tagged with its generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug)]
pub enum Completion {
    Applied(usize),
    /// The query moved on while this fetch was in flight.
    Stale { current: u64 },
    Failed(anyhow::Error),
}

/// Search bookkeeping without any timers or I/O.
///
/// Every edit bumps `generation`. A fetch is tagged with the generation it
/// was issued for and its result is only committed while that generation
/// is still current, so a slow response can't overwrite a newer one.
#[derive(Debug)]
pub struct SearchState {
    query: String,
    generation: u64,
    awaiting: Option<u64>,
    sample_loading: bool,
    sample: Vec<Book>,
    results: Vec<Book>,
    placeholders: usize,
}

impl SearchState {
    pub fn new(placeholders: usize) -> SearchState {
        SearchState {
            query: String::new(),
            generation: 0,
            awaiting: None,
            sample_loading: false,
            sample: vec![],
            results: vec![],
            placeholders,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin_sample(&mut self) {
        self.sample_loading = true;
    }

    /// A failed sample leaves the previous (initially empty) sample list.
    pub fn finish_sample(&mut self, result: anyhow::Result<Vec<Book>>) -> Completion {
        self.sample_loading = false;

        match result {
            Ok(books) => {
                let count = books.len();
                self.sample = books;
                Completion::Applied(count)
            }
            Err(err) => Completion::Failed(err),
        }
    }

    /// Records a new raw query. Returns the new generation, or `None` when
    /// the text did not change.
    pub fn edit(&mut self, query: String) -> Option<u64> {
        if query == self.query {
            return None;
        }

        self.generation += 1;
        self.query = query;
        self.awaiting = if self.query.is_empty() {
            None
        } else {
            Some(self.generation)
        };

        Some(self.generation)
    }

    /// Called when the debounce timer armed for `generation` fires.
    pub fn settle(&mut self, generation: u64) -> Option<SearchRequest> {
        if generation != self.generation || self.awaiting != Some(generation) {
            return None;
        }

        Some(SearchRequest {
            generation,
            query: self.query.clone(),
        })
    }

    pub fn complete(
        &mut self,
        generation: u64,
        result: anyhow::Result<Vec<Book>>,
    ) -> Completion {
        if generation != self.generation {
            return Completion::Stale {
                current: self.generation,
            };
        }

        self.awaiting = None;

        match result {
            Ok(books) => {
                let count = books.len();
                self.results = books;
                Completion::Applied(count)
            }
            Err(err) => Completion::Failed(err),
        }
    }

    pub fn view(&self) -> SearchView {
        if self.query.is_empty() {
            if self.sample_loading {
                SearchView::Loading {
                    placeholders: self.placeholders,
                }
            } else {
                SearchView::Sample(self.sample.clone())
            }
        } else if self.awaiting.is_some() {
            SearchView::Loading {
                placeholders: self.placeholders,
            }
        } else {
            SearchView::Results {
                query: self.query.clone(),
                books: self.results.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Completion, SearchRequest, SearchState, SearchView};
    use crate::models::Book;

    fn books(titles: &[&str]) -> Vec<Book> {
        titles
            .iter()
            .map(|title| Book {
                title: Some(title.to_string()),
                ..Book::default()
            })
            .collect()
    }

    #[test]
    fn sample_then_results() -> anyhow::Result<()> {
        let mut state = SearchState::new(4);

        state.begin_sample();
        assert_eq!(SearchView::Loading { placeholders: 4 }, state.view());

        state.finish_sample(Ok(books(&["Ra"])));
        assert_eq!(SearchView::Sample(books(&["Ra"])), state.view());

        let generation = state.edit("dune".to_string()).unwrap();
        assert!(state.view().is_loading());

        let expected = SearchRequest {
            generation,
            query: "dune".to_string(),
        };
        assert_eq!(Some(expected), state.settle(generation));

        state.complete(generation, Ok(books(&["Dune"])));

        let expected = SearchView::Results {
            query: "dune".to_string(),
            books: books(&["Dune"]),
        };
        assert_eq!(expected, state.view());

        Ok(())
    }

    #[test]
    fn superseded_generation_does_not_settle() -> anyhow::Result<()> {
        let mut state = SearchState::new(4);

        let first = state.edit("h".to_string()).unwrap();
        let second = state.edit("he".to_string()).unwrap();

        assert_eq!(None, state.settle(first));
        assert!(state.settle(second).is_some());

        Ok(())
    }

    #[test]
    fn unchanged_query_is_not_an_edit() -> anyhow::Result<()> {
        let mut state = SearchState::new(4);

        assert_eq!(Some(1), state.edit("dune".to_string()));
        assert_eq!(None, state.edit("dune".to_string()));
        assert_eq!(1, state.generation());

        Ok(())
    }

    #[test]
    fn stale_result_is_discarded() -> anyhow::Result<()> {
        let mut state = SearchState::new(4);

        let slow = state.edit("a".to_string()).unwrap();
        state.settle(slow);
        let fast = state.edit("ab".to_string()).unwrap();
        state.settle(fast);

        state.complete(fast, Ok(books(&["ab"])));

        match state.complete(slow, Ok(books(&["a"]))) {
            Completion::Stale { current } => assert_eq!(fast, current),
            other => panic!("expected stale completion, got {:?}", other),
        }

        let expected = SearchView::Results {
            query: "ab".to_string(),
            books: books(&["ab"]),
        };
        assert_eq!(expected, state.view());

        Ok(())
    }

    #[test]
    fn failure_keeps_previous_results() -> anyhow::Result<()> {
        let mut state = SearchState::new(4);

        let first = state.edit("dune".to_string()).unwrap();
        state.complete(first, Ok(books(&["Dune"])));

        let second = state.edit("dune messiah".to_string()).unwrap();
        let completion = state.complete(second, Err(anyhow::Error::msg("offline")));

        assert!(matches!(completion, Completion::Failed(_)));

        let expected = SearchView::Results {
            query: "dune messiah".to_string(),
            books: books(&["Dune"]),
        };
        assert_eq!(expected, state.view());

        Ok(())
    }

    #[test]
    fn clearing_query_returns_to_sample() -> anyhow::Result<()> {
        let mut state = SearchState::new(4);
        state.finish_sample(Ok(books(&["Ra"])));

        let generation = state.edit("du".to_string()).unwrap();
        let cleared = state.edit(String::new()).unwrap();

        assert_eq!(None, state.settle(generation));
        assert_eq!(None, state.settle(cleared));
        assert_eq!(SearchView::Sample(books(&["Ra"])), state.view());

        Ok(())
    }
}
