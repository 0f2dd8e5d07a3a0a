mod controller;
mod state;

pub use controller::{SearchController, SearchHandle};
pub use state::{Completion, SearchRequest, SearchState, SearchView};
