//! Catalogue-wide constants.

pub const RESULTS_PATH: &str = "/books/";
pub const FACETS_PATH: &str = "/books/facets/";

/// Marks a request as in-page AJAX so the server answers with a fragment.
pub const AJAX_HEADER_NAME: &str = "X-Requested-With";
pub const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";

/// Id of the element holding pagination JSON inside the results markup.
pub const RESULTS_DATA_ELEMENT_ID: &str = "results-data";

pub const RANGE_INPUT_DEBOUNCE_MS: u64 = 500;

/// Noun used in the results summary line.
pub const RESOURCE_NAME: &str = "book";

pub const FACET_LABELS: &[(&str, &str)] = &[
    ("author", "Author"),
    ("editor", "Editor"),
    ("translator", "Translator"),
    ("publisher", "Publisher"),
    ("pub_year", "Publication Year"),
    ("language", "Language"),
    ("subject", "Subject"),
    ("annotator", "Annotator"),
];

pub const FACET_TABS: &[&[&str]] = &[
    &["author", "editor", "translator"],
    &["publisher", "pub_year"],
    &["language", "subject"],
    &["annotator"],
];
