//! Browse the Open Library catalog: debounced search, book details and
//! session favorites.

pub mod catalog;
pub mod config;
pub mod details;
pub mod favorites;
pub mod models;
pub mod render;
pub mod search;
pub mod shell;
pub mod stage;
pub mod utils;

pub use config::Config;
pub use favorites::FavoritesStore;
pub use search::{SearchController, SearchHandle, SearchView};
