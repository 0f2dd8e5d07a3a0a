use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, error};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::favorites::FavoritesStore;
use crate::models::{Book, Description, NO_DESCRIPTION};
use crate::render;
use crate::utils::{FutureUtil, PinFuture};

/// Fetches and normalizes the description of a book's work.
///
/// Falls back to whatever the search record carried when there is no work
/// key, and to the sentinel text when the fetch fails.
pub async fn load_description<C>(catalog: &C, book: &Book) -> String
where
    C: Catalog + ?Sized,
{
    let key = match book.work_key() {
        Some(key) => key,
        None => return book.description.normalize(),
    };

    resolve(key, catalog.description(key).await)
}

/// Loads the descriptions of `books` concurrently, keyed by work key.
/// Books without a key are skipped.
pub async fn load_descriptions<C>(catalog: Arc<C>, books: &[Book]) -> HashMap<String, String>
where
    C: Catalog + 'static,
{
    let futures = books
        .iter()
        .filter_map(Book::work_key)
        .map(|key| {
            let catalog = Arc::clone(&catalog);
            let key = key.to_string();

            Box::pin(async move {
                let description = catalog.description(&key).await;
                let text = resolve(&key, description);
                (key, text)
            }) as PinFuture<(String, String)>
        })
        .collect::<Vec<_>>();

    debug!("loading {} descriptions", futures.len());

    futures.await_all().await.into_iter().collect()
}

/// Renders the favorites list with every description fetched.
pub async fn favorites_page<C>(config: &Config, catalog: Arc<C>, favorites: &FavoritesStore) -> String
where
    C: Catalog + 'static,
{
    let books = favorites.iter().cloned().collect::<Vec<_>>();
    let descriptions = load_descriptions(catalog, &books).await;

    render::favorites(config, favorites, &descriptions)
}

fn resolve(key: &str, description: anyhow::Result<Description>) -> String {
    match description {
        Ok(description) => description.normalize(),
        Err(err) => {
            error!("Error in description {}: {:?}", key, err);
            NO_DESCRIPTION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{favorites_page, load_description, load_descriptions};
    use crate::catalog::fake::FakeCatalog;
    use crate::config::Config;
    use crate::favorites::FavoritesStore;
    use crate::models::{Book, Description, NO_DESCRIPTION};

    fn work(key: Option<&str>) -> Book {
        Book {
            key: key.map(str::to_string),
            ..Book::default()
        }
    }

    #[tokio::test]
    async fn description_from_work() -> anyhow::Result<()> {
        let catalog = FakeCatalog::new()
            .description("/works/OL1W", Description::Tagged("Tagged.".to_string()));

        assert_eq!("Tagged.", load_description(&catalog, &work(Some("/works/OL1W"))).await);

        Ok(())
    }

    #[tokio::test]
    async fn description_failure_falls_back() -> anyhow::Result<()> {
        let catalog = FakeCatalog::new();

        assert_eq!(
            NO_DESCRIPTION,
            load_description(&catalog, &work(Some("/works/missing"))).await
        );

        Ok(())
    }

    #[tokio::test]
    async fn description_without_key_uses_record() -> anyhow::Result<()> {
        let catalog = FakeCatalog::new();

        let mut book = work(None);
        assert_eq!(NO_DESCRIPTION, load_description(&catalog, &book).await);

        book.description = Description::Text("Inline.".to_string());
        assert_eq!("Inline.", load_description(&catalog, &book).await);

        Ok(())
    }

    #[tokio::test]
    async fn descriptions_for_favorites() -> anyhow::Result<()> {
        let catalog = Arc::new(
            FakeCatalog::new()
                .description("/works/OL1W", Description::Text("One.".to_string()))
                .description("/works/OL2W", Description::Absent),
        );

        let books = vec![
            work(Some("/works/OL1W")),
            work(Some("/works/OL2W")),
            work(Some("/works/OL3W")),
            work(None),
        ];

        let descriptions = load_descriptions(catalog, &books).await;

        assert_eq!(3, descriptions.len());
        assert_eq!("One.", descriptions["/works/OL1W"]);
        assert_eq!(NO_DESCRIPTION, descriptions["/works/OL2W"]);
        assert_eq!(NO_DESCRIPTION, descriptions["/works/OL3W"]);

        Ok(())
    }

    #[tokio::test]
    async fn favorites_page_after_removal_keeps_descriptions() -> anyhow::Result<()> {
        let catalog = Arc::new(
            FakeCatalog::new()
                .description("/works/OL1W", Description::Text("One.".to_string()))
                .description("/works/OL2W", Description::Text("Two.".to_string())),
        );
        let config = Config::default();
        let mut favorites = FavoritesStore::new();

        for (title, key, isbn) in [("One", "/works/OL1W", "1"), ("Two", "/works/OL2W", "2")] {
            favorites.add(Book {
                title: Some(title.to_string()),
                key: Some(key.to_string()),
                isbn: vec![isbn.to_string()],
                ..Book::default()
            });
        }

        let page = favorites_page(&config, Arc::clone(&catalog), &favorites).await;
        assert!(page.contains("One.") && page.contains("Two."));

        favorites.remove(Some("1"));

        let page = favorites_page(&config, catalog, &favorites).await;

        let expected = "[0] Two\n    N/A\n    Two.\n      ★\n";

        assert_eq!(expected, page);
        assert!(!page.contains("Loading..."));

        Ok(())
    }
}
