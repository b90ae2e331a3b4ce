use dioxus::prelude::*;

use crate::data_definitions::url_param::SearchUrlQuery;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // the whole query string is the search form state
    #[route("/?:..query")]
    SearchPage { query: SearchUrlQuery },
}

impl Route {
    pub fn search_page_from_query(query: &str) -> Self {
        Self::SearchPage { query: SearchUrlQuery::from(query) }
    }
}
