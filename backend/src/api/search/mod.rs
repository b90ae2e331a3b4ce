//! Search endpoint calls and module exports.

mod search_facets;
pub use search_facets::fetch_facets;

mod search_for_results;
pub use search_for_results::fetch_results;

pub mod results_markup;
