//! Endpoint configuration for the archive search service.

use common::search_const::{FACETS_PATH, RESULTS_PATH};

pub const DEFAULT_ARCHIVE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub results_url: String,
    pub facets_url: String,
}

impl EndpointConfig {
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            results_url: format!("{base}{RESULTS_PATH}"),
            facets_url: format!("{base}{FACETS_PATH}"),
        }
    }

    pub fn from_env() -> Self {
        Self::with_base(&std::env::var("ARCHIVE_URL").unwrap_or(DEFAULT_ARCHIVE_URL.to_string()))
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::with_base(DEFAULT_ARCHIVE_URL)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_trailing_slash_is_ignored() {
        let config = EndpointConfig::with_base("https://archive.example.org/");
        assert_eq!(config.results_url, "https://archive.example.org/books/");
        assert_eq!(config.facets_url, "https://archive.example.org/books/facets/");
    }
}
