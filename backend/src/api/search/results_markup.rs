//! Pagination metadata embedded in the rendered results markup.

use anyhow::Context;
use common::search_const::RESULTS_DATA_ELEMENT_ID;
use common::search_result::ResultsMetadata;

/// Read the `{"total": .., "pages": ..}` JSON held by the `#results-data` element.
pub fn extract_results_data(markup: &str) -> anyhow::Result<ResultsMetadata> {
    let Some(body) = element_body_by_id(markup, RESULTS_DATA_ELEMENT_ID) else {
        anyhow::bail!("Results markup has no #{} element", RESULTS_DATA_ELEMENT_ID);
    };
    serde_json::from_str::<ResultsMetadata>(body.trim())
        .with_context(|| format!("Invalid #{} JSON: {}", RESULTS_DATA_ELEMENT_ID, body.trim()))
}

fn element_body_by_id<'a>(markup: &'a str, id: &str) -> Option<&'a str> {
    let attr_start = [format!("id=\"{id}\""), format!("id='{id}'")]
        .iter()
        .find_map(|attr| markup.find(attr.as_str()))?;
    let body_start = attr_start + markup[attr_start..].find('>')? + 1;
    let body_end = body_start + markup[body_start..].find("</")?;
    Some(&markup[body_start..body_end])
}
