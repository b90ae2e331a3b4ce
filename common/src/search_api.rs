//! Seam between the search state manager and the remote catalogue index.

use crate::search_query::FormState;
use crate::search_result::{FacetsResponse, ResultsPage};

#[allow(async_fn_in_trait)]
pub trait SearchApi {
    /// Facet counts narrowed by the given criteria; the page number is not sent.
    async fn fetch_facets(&self, form: &FormState) -> anyhow::Result<FacetsResponse>;

    /// Rendered page of results for the given criteria.
    async fn fetch_results(&self, form: &FormState) -> anyhow::Result<ResultsPage>;
}
