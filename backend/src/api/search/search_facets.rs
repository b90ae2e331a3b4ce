//! Facets endpoint and response shaping.

use common::{search_query::FormState, search_result::FacetsResponse};

use crate::http_utils::archive_client::ArchiveClient;

pub async fn fetch_facets(client: &ArchiveClient, form: &FormState) -> anyhow::Result<FacetsResponse> {
    // counts do not depend on the page, so it is never part of the facets request
    let query = form.without_page().to_query_string();
    let response_txt = client.get_text(&client.config().facets_url, &query).await?;
    let facets = serde_json::from_str::<FacetsResponse>(&response_txt)
        .map_err(|e| anyhow::anyhow!("Invalid facets payload: {e}"))?;
    Ok(facets)
}
