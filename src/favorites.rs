use log::{debug, warn};

use crate::models::Book;

/// Books the user starred during this session.
///
/// Membership is decided by ISBN overlap: a book counts as a favorite when
/// any of its ISBNs appears in any stored book. Nothing is persisted.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    inner: Vec<Book>,
    revision: u64,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.inner.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.inner.get(index)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bumped on every mutation; views compare it to decide on a redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends without checking for an existing entry.
    pub fn add(&mut self, book: Book) {
        debug!("favorite added: {:?}", book.title());
        self.inner.push(book);
        self.revision += 1;
    }

    pub fn remove(&mut self, isbn: Option<&str>) {
        let isbn = match isbn {
            Some(isbn) => isbn,
            None => return,
        };

        let before = self.inner.len();
        self.inner.retain(|book| !book.has_isbn(isbn));

        if self.inner.len() != before {
            debug!("favorite removed: isbn = {}", isbn);
            self.revision += 1;
        }
    }

    pub fn is_favorite(&self, isbn: Option<&str>) -> bool {
        match isbn {
            Some(isbn) => self.inner.iter().any(|book| book.has_isbn(isbn)),
            None => false,
        }
    }

    /// Flips the favorite state of `book` keyed by its first ISBN and
    /// returns the new state. Books without an ISBN are never stored.
    pub fn toggle(&mut self, book: &Book) -> bool {
        let isbn = match book.primary_isbn() {
            Some(isbn) => isbn,
            None => {
                warn!("{:?} has no ISBN, can't favorite it", book.title());
                return false;
            }
        };

        if self.is_favorite(Some(isbn)) {
            self.remove(Some(isbn));
            false
        } else {
            self.add(book.clone());
            true
        }
    }
}
