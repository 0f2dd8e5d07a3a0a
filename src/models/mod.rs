mod book;
mod description;

pub use book::{Book, CoverId};
pub use description::{truncate_lines, Description, NO_DESCRIPTION};
