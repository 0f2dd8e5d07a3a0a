//! Plain-text renderings of the result grid, detail page and favorites list.

use std::collections::HashMap;
use std::fmt::Write;

use crate::catalog::url;
use crate::config::Config;
use crate::favorites::FavoritesStore;
use crate::models::{truncate_lines, Book};
use crate::search::SearchView;

const NOT_AVAILABLE: &str = "N/A";

pub fn favorite_label(favorites: &FavoritesStore, book: &Book) -> &'static str {
    if favorites.is_favorite(book.primary_isbn()) {
        "Remove From Favorites"
    } else {
        "Add To Favorites"
    }
}

fn star(favorites: &FavoritesStore, book: &Book) -> &'static str {
    if favorites.is_favorite(book.primary_isbn()) {
        "★"
    } else {
        "☆"
    }
}

pub fn grid_item(config: &Config, favorites: &FavoritesStore, index: usize, book: &Book) -> String {
    format!(
        "[{}] {}\n    {}\n    {} {}\n    {}\n",
        index,
        book.title().unwrap_or_default(),
        book.author().unwrap_or(NOT_AVAILABLE),
        star(favorites, book),
        favorite_label(favorites, book),
        url::cover(config, book),
    )
}

pub fn search_view(config: &Config, favorites: &FavoritesStore, view: &SearchView) -> String {
    let mut out = String::new();

    match view {
        SearchView::Loading { placeholders } => {
            for _ in 0..*placeholders {
                out.push_str("[ ░░░░░░░░░░ ]\n");
            }
            return out;
        }
        SearchView::Sample(_) => out.push_str("-- Sample --\n"),
        SearchView::Results { query, .. } => {
            let _ = writeln!(out, "-- Results for {:?} --", query);
        }
    }

    let books = view.books();

    if books.is_empty() {
        out.push_str("No books found\n");
    }

    for (index, book) in books.iter().enumerate() {
        out.push_str(&grid_item(config, favorites, index, book));
    }

    out
}

fn section<F>(out: &mut String, name: &str, not_provided: &str, values: &[String], body: F)
where
    F: Fn(&mut String, &[String]),
{
    let _ = writeln!(out, "\n{}", name);

    if values.is_empty() {
        let _ = writeln!(out, "  {} not provided", not_provided);
    } else {
        body(out, values);
    }
}

fn numbered(out: &mut String, values: &[String]) {
    for (index, value) in values.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, value);
    }
}

fn joined(out: &mut String, values: &[String]) {
    let _ = writeln!(out, "  {}", values.join(", "));
}

fn listed(out: &mut String, values: &[String]) {
    for value in values {
        let _ = writeln!(out, "  {}", value);
    }
}

/// `description` is `None` while the work is still being fetched.
pub fn detail(
    config: &Config,
    favorites: &FavoritesStore,
    book: &Book,
    description: Option<&str>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", book.title().unwrap_or("No Title"));
    let _ = writeln!(out, "{}", url::cover(config, book));
    let _ = writeln!(
        out,
        "{}\t\t-\t\t{}  {}",
        book.author().unwrap_or(NOT_AVAILABLE),
        book.first_publish_date().unwrap_or(NOT_AVAILABLE),
        star(favorites, book),
    );

    if let (Some(average), Some(count)) = (book.ratings_average, book.ratings_count) {
        let _ = writeln!(out, "Rated {:.2} ({} ratings)", average, count);
    }

    match description {
        Some(text) => {
            let _ = writeln!(out, "\n{}", truncate_lines(text, config.description_max_lines));
        }
        None => out.push_str("\nLoading...\n"),
    }

    section(&mut out, "Subjects", "Subjects", &book.subject, numbered);
    section(&mut out, "Languages", "Languages", &book.language, joined);
    section(&mut out, "Format", "Format", &book.format, listed);
    section(&mut out, "First sentence", "First sentence", &book.first_sentence, listed);
    section(&mut out, "Publishers", "Publishers", &book.publisher, numbered);
    section(&mut out, "ISBN", "ISBN", &book.isbn, joined);

    out
}

pub fn favorite_card(
    config: &Config,
    favorites: &FavoritesStore,
    index: usize,
    book: &Book,
    description: Option<&str>,
) -> String {
    let description = match description {
        Some(text) => truncate_lines(text, config.description_max_lines),
        None => String::from("Loading..."),
    };

    format!(
        "[{}] {}\n    {}\n    {}\n    {}  {}\n",
        index,
        book.title().unwrap_or_default(),
        book.author().unwrap_or(NOT_AVAILABLE),
        description.replace('\n', "\n    "),
        book.first_publish_date().unwrap_or_default(),
        star(favorites, book),
    )
}

/// `descriptions` is keyed by work key, as produced by
/// [`crate::details::load_descriptions`].
pub fn favorites(
    config: &Config,
    favorites: &FavoritesStore,
    descriptions: &HashMap<String, String>,
) -> String {
    if favorites.is_empty() {
        return String::from("No favorites yet\n");
    }

    favorites
        .iter()
        .enumerate()
        .map(|(index, book)| {
            let description = book
                .work_key()
                .and_then(|key| descriptions.get(key))
                .map(String::as_str);

            favorite_card(config, favorites, index, book, description)
        })
        .collect()
}
