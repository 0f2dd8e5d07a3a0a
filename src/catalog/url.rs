use crate::config::Config;
use crate::models::Book;

pub fn description(config: &Config, key: &str) -> String {
    let key = key.trim_start_matches('/');

    format!("{}/{}.json", config.site_url.trim_end_matches('/'), key)
}

pub fn cover(config: &Config, book: &Book) -> String {
    match book.cover_i {
        Some(ref id) => format!(
            "{}/b/id/{}-L.jpg",
            config.covers_url.trim_end_matches('/'),
            id
        ),
        None => config.placeholder_image.clone(),
    }
}
