//! Results endpoint for rendered result pages.

use common::{search_query::FormState, search_result::ResultsPage};

use crate::api::search::results_markup::extract_results_data;
use crate::http_utils::archive_client::ArchiveClient;

pub async fn fetch_results(client: &ArchiveClient, form: &FormState) -> anyhow::Result<ResultsPage> {
    let markup = client.get_text(&client.config().results_url, &form.to_query_string()).await?;
    let metadata = extract_results_data(&markup)?;
    Ok(ResultsPage::from_markup(metadata, markup, form.page))
}
