use common::search_api::SearchApi;
use common::search_const::{AJAX_HEADER_NAME, AJAX_HEADER_VALUE};
use common::search_query::FormState;
use common::search_result::{FacetsResponse, ResultsPage};
use tracing::debug;

use crate::api::search;
use crate::config::EndpointConfig;

/// HTTP client for the archive's facets and results endpoints.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: reqwest::Client,
    config: EndpointConfig,
}

impl ArchiveClient {
    pub fn new(config: EndpointConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// GET `endpoint?query` as an in-page AJAX request and return the body text.
    pub async fn get_text(&self, endpoint: &str, query: &str) -> anyhow::Result<String> {
        let url = if query.is_empty() {
            endpoint.to_string()
        } else {
            format!("{endpoint}?{query}")
        };
        debug!("ARCHIVE REQUEST: {}", url);
        let response = self.http
            .get(&url)
            .header(AJAX_HEADER_NAME, AJAX_HEADER_VALUE)
            .send()
            .await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        debug!("ARCHIVE RESPONSE: len = {}", response_txt.len());
        Ok(response_txt)
    }
}

impl SearchApi for ArchiveClient {
    async fn fetch_facets(&self, form: &FormState) -> anyhow::Result<FacetsResponse> {
        search::fetch_facets(self, form).await
    }

    async fn fetch_results(&self, form: &FormState) -> anyhow::Result<ResultsPage> {
        search::fetch_results(self, form).await
    }
}
