use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


/// Body of the facets endpoint: facet name -> value -> count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetsResponse {
    pub total: u64,
    pub facets: BTreeMap<String, BTreeMap<String, u64>>,
    pub range_facets: BTreeMap<String, BTreeMap<String, u64>>,
}

impl FacetsResponse {
    pub fn count_for(&self, facet: &str, value: &str) -> Option<u64> {
        self.facets.get(facet)
            .or_else(|| self.range_facets.get(facet))
            .and_then(|values| values.get(value))
            .copied()
    }
}

/// Pagination data embedded in the rendered results markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultsMetadata {
    pub total: u64,
    pub pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultsPage {
    pub total_results: u64,
    pub total_pages: u32,
    /// Rendered markup, displayed as received.
    pub content: String,
    pub page: u32,
}

impl ResultsPage {
    pub fn from_markup(metadata: ResultsMetadata, content: String, page: u32) -> Self {
        Self {
            total_results: metadata.total,
            total_pages: metadata.pages,
            content,
            page,
        }
    }
}
