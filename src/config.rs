use std::time::Duration;

/// Endpoints and tuning knobs for a browsing session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint, queried with `q` and `limit`.
    pub search_url: String,
    /// Site root; work keys such as `/works/OL1W` are appended to it.
    pub site_url: String,
    pub covers_url: String,
    /// Shown when a book has no cover id.
    pub placeholder_image: String,
    pub search_limit: usize,
    /// Query fetched once at start, before the user typed anything.
    pub sample_query: String,
    pub sample_limit: usize,
    pub debounce: Duration,
    pub placeholder_count: usize,
    pub description_max_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_url: String::from("https://openlibrary.org/search.json"),
            site_url: String::from("https://openlibrary.org"),
            covers_url: String::from("https://covers.openlibrary.org"),
            placeholder_image: String::from("https://placehold.co/500x500"),
            search_limit: 10,
            sample_query: String::from("ra"),
            sample_limit: 20,
            debounce: Duration::from_millis(390),
            placeholder_count: 4,
            description_max_lines: 5,
        }
    }
}

impl Config {
    /// Points every endpoint at `base`; used against local mock servers.
    pub fn with_base_url(base: &str) -> Config {
        let base = base.trim_end_matches('/');

        Config {
            search_url: format!("{}/search.json", base),
            site_url: base.to_string(),
            covers_url: base.to_string(),
            ..Config::default()
        }
    }
}
