//! Query string carried by the search route.

use std::fmt::Display;

/// Raw query string of the search page, without the leading `?`.
///
/// Kept verbatim; parsing into a form state happens in the orchestrator so that
/// the same text can be compared against what was last pushed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchUrlQuery(pub String);

impl From<&str> for SearchUrlQuery {
    fn from(value: &str) -> Self {
        SearchUrlQuery(value.strip_prefix('?').unwrap_or(value).to_string())
    }
}

// the router writes this after the `?`
impl Display for SearchUrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
